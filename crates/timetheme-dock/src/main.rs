//! Timetheme command-line dock
//!
//! Reads and changes the portfolio's theme preferences and previews the
//! time slider from a terminal.

use clap::Parser;
use timetheme_dock::cli::{self, Cli};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Timetheme v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    cli::run(cli, &mut stdout).await
}
