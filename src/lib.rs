pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod parser;
pub mod profile;
pub mod services;

use anyhow::Context;
use clap::CommandFactory;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn install_metrics(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    use metrics_exporter_prometheus::PrometheusBuilder;
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { port } => {
            let prometheus_handle = install_metrics(&config)?;
            cli::cmd_serve(config, port, prometheus_handle).await
        }

        Commands::Ratings {
            search,
            media,
            sort,
            dir,
            limit,
        } => cli::cmd_ratings(&config, search.as_deref(), &media, &sort, &dir, limit).await,

        Commands::Stats => cli::cmd_stats(&config).await,

        Commands::Spotlight { seed } => cli::cmd_spotlight(&config, seed).await,

        Commands::Profile { json } => cli::cmd_profile(&config, json),

        Commands::Init => cli::cmd_init(cli.config.as_deref()),
    }
}
