use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod application;
mod bootstrap;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

#[cfg(test)]
mod tests;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "blog-server", version, about = "REST API for users, posts and comments")]
struct Cli {
    /// Apply the schema and exit without starting the HTTP server.
    #[arg(long, conflicts_with = "tear_down")]
    just_backend: bool,

    /// Drop the schema (only when TESTING is set) and exit.
    #[arg(long)]
    tear_down: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level, settings.testing)?;
    info!(testing = settings.testing, "starting blog-server");

    if cli.tear_down {
        return bootstrap::tear_down(&settings).await;
    }

    let blog = bootstrap::up(&settings, cli.just_backend).await?;
    let Some(addr) = blog.local_addr() else {
        return blog.shutdown().await;
    };
    info!(%addr, "blog-server ready, press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    blog.shutdown().await
}
