/// Tunebox - playlist music player
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebox_cli::{App, Command, TuneboxConfig};

#[derive(Parser)]
#[command(name = "tunebox")]
#[command(about = "Playlist music player with local uploads and song search", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TUNEBOX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = TuneboxConfig::load(cli.config.as_deref())?;
    tracing::debug!(data_dir = %config.storage.data_dir.display(), "Configuration loaded");

    let mut app = App::open(&config).await?;
    let result = app.execute(cli.command).await;

    // Rejected commands change nothing, but earlier writes still land
    app.flush().await;

    print!("{}", result?);
    Ok(())
}
