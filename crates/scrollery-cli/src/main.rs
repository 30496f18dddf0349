use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollery_core::AppConfig;

mod commands;
mod scene;

#[derive(Parser)]
#[command(name = "scrollery")]
#[command(author, version, about = "Scroll-driven step animations")]
struct Cli {
    /// Configuration file (defaults to ~/.config/scrollery/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured animation steps
    Steps,
    /// Show which step a scroll offset falls into
    StepAt {
        /// Scroll offset
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Step the page was in before (kept when the offset sits on a boundary)
        #[arg(long, default_value_t = 0)]
        current: usize,
    },
    /// Replay a scripted scroll through a scene of animated elements
    Simulate {
        /// Scene file describing the elements and their animations
        scene: PathBuf,
        /// Comma separated scroll offsets, overriding the scene's own
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        offsets: Option<Vec<f64>>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Steps => commands::steps::run(&config),
        Commands::StepAt { y, current } => commands::step_at::run(&config, y, current),
        Commands::Simulate { scene, offsets } => {
            commands::simulate::run(&config, &scene, offsets).await
        }
    }
}
