mod init;
mod profile;
mod ratings;
mod serve;
mod spotlight;
mod stats;

pub use init::cmd_init;
pub use profile::cmd_profile;
pub use ratings::cmd_ratings;
pub use serve::cmd_serve;
pub use spotlight::cmd_spotlight;
pub use stats::cmd_stats;

use crate::config::Config;
use crate::services::{LoadState, RatingsCatalog, source_from_config};

/// Builds a catalog from config and runs the one-shot load. A failed load is
/// reported but still returns the (empty) catalog.
async fn load_catalog(config: &Config) -> anyhow::Result<RatingsCatalog> {
    let source = source_from_config(&config.ratings)?;
    let catalog = RatingsCatalog::new(
        source,
        config.ratings.layout.forced(),
        config.ratings.spotlight_min_score,
    );

    let report = catalog.load().await;
    if report.state == LoadState::Failed {
        println!("⚠ Could not load ratings from {}", report.source);
    }

    Ok(catalog)
}
