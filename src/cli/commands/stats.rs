//! Stats command handler

use crate::config::Config;

const BAR_WIDTH: f64 = 40.0;

fn bar(length: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = length.round() as usize;
    "█".repeat(cells)
}

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config).await?;
    let summary = catalog.summary().await;

    if summary.total == 0 {
        println!("No ratings loaded.");
        return Ok(());
    }

    println!(
        "Ratings: {} total ({} movies, {} series)",
        summary.total, summary.movies, summary.series
    );
    println!("Average score: {:.1}", summary.average_score);
    println!();

    let histogram = &summary.histogram;
    println!("Score distribution ({} scored)", histogram.total());
    println!("{:-<60}", "");
    for (idx, height) in histogram.bar_heights(BAR_WIDTH).into_iter().enumerate() {
        let score = idx + 1;
        println!("{score:>3} | {:<40} {}", bar(height), histogram.count_for(score));
    }
    println!();

    let timeline = &summary.timeline;
    if timeline.is_empty() {
        return Ok(());
    }

    println!(
        "Release years {}-{} (peak {})",
        timeline.min_year, timeline.max_year, timeline.peak
    );
    println!("{:-<60}", "");
    let peak = f64::from(timeline.peak.max(1));
    for entry in &timeline.counts {
        let length = f64::from(entry.count) / peak * BAR_WIDTH;
        println!("{} | {:<40} {}", entry.year, bar(length), entry.count);
    }

    Ok(())
}
