use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use bookstall::config::Config;

/// Terminal book inventory manager.
#[derive(Parser)]
#[command(name = "bookstall", version)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the collection store base URL.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bookstall::logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.store.base_url = base_url;
    }
    config.validate()?;

    bookstall::ui::runtime::run(config)
        .await
        .context("UI loop failed")?;
    Ok(())
}
