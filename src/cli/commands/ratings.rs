//! Ratings list command handler

use crate::config::Config;
use crate::models::RatingItem;
use crate::services::{MediaFilter, SortDirection, SortKey, SortSpec, ViewState};

const TITLE_WIDTH: usize = 40;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

fn print_row(item: &RatingItem) {
    let kind = if item.is_movie() { "🎬" } else { "📺" };
    println!(
        "{} {:<width$} {:>4} {:>5}/10  IMDb {:>4.1}  {}",
        kind,
        truncate(&item.title, TITLE_WIDTH),
        item.year,
        item.my_rating,
        item.imdb_rating,
        item.date_rated,
        width = TITLE_WIDTH,
    );
    if !item.genres.is_empty() {
        println!("   {}", item.genres.join(", "));
    }
}

pub async fn cmd_ratings(
    config: &Config,
    search: Option<&str>,
    media: &str,
    sort: &str,
    dir: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let media: MediaFilter = media.parse().map_err(anyhow::Error::msg)?;
    let key: SortKey = sort.parse().map_err(anyhow::Error::msg)?;
    let direction: SortDirection = dir.parse().map_err(anyhow::Error::msg)?;

    let state = ViewState::default()
        .with_search(search.unwrap_or_default())
        .with_media(media)
        .with_sort(SortSpec::new(key, direction));

    let catalog = super::load_catalog(config).await?;
    let total = catalog.items().await.len();
    let view = catalog.view(&state).await;

    if view.is_empty() {
        println!("No ratings found matching your criteria.");
        return Ok(());
    }

    println!("Ratings ({} of {} shown, sorted by {})", view.len(), total, key);
    println!("{:-<80}", "");

    for item in view.iter().take(limit.unwrap_or(view.len())) {
        print_row(item);
    }

    Ok(())
}
