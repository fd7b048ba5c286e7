//! Spotlight command handler

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::services::select_spotlight;

pub async fn cmd_spotlight(config: &Config, seed: Option<u64>) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config).await?;

    let pick = match seed {
        Some(seed) => {
            let items = catalog.items().await;
            let mut rng = StdRng::seed_from_u64(seed);
            select_spotlight(&items, config.ratings.spotlight_min_score, &mut rng).cloned()
        }
        None => catalog.spotlight().await,
    };

    let Some(item) = pick else {
        println!("No ratings to feature.");
        return Ok(());
    };

    println!("★ Spotlight");
    println!("{:-<60}", "");
    println!("Title:    {}", item.title);
    println!("Type:     {}", item.title_type);
    println!("Year:     {}", item.release_year());
    println!("My score: {}/10", item.my_rating);
    println!("IMDb:     {:.1}", item.imdb_rating);
    if !item.genres.is_empty() {
        println!("Genres:   {}", item.genres.join(", "));
    }
    if !item.director.is_empty() {
        println!("Director: {}", item.director);
    }
    if item.runtime_mins > 0 {
        println!("Runtime:  {} min", item.runtime_mins);
    }
    if !item.url.is_empty() {
        println!("Link:     {}", item.url);
    }

    Ok(())
}
