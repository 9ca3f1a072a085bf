use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mushaf::app::AppContext;
use mushaf::config::Config;

#[derive(Parser)]
#[command(name = "mushaf")]
#[command(about = "Quran chapter-assembly server", long_about = None)]
struct Cli {
    /// Path to a config file (default: ~/.config/mushaf/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address from the config
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let bind = cli.bind.unwrap_or_else(|| config.bind.clone());

    let ctx = Arc::new(AppContext::new(&config)?);
    mushaf::server::run(ctx, &bind).await?;

    Ok(())
}
