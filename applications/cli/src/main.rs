/// Cadence - interactive playlist navigator
use cadence_cli::{CliConfig, Session};
use cadence_playback::PlaylistStore;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Interactive playlist navigator with shuffle and repeat", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./cadence.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(long, env = "CADENCE_SEED")]
    seed: Option<u64>,

    /// Start new playlists with repeat on
    #[arg(long)]
    repeat: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.playback.shuffle_seed = Some(seed);
    }
    if cli.repeat {
        config.playback.repeat = true;
    }
    config.validate()?;

    // Initialize tracing on stderr so logs never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        repeat = config.playback.repeat,
        algorithm = ?config.playback.shuffle_algorithm,
        seeded = config.playback.shuffle_seed.is_some(),
        "Starting Cadence"
    );

    let store = PlaylistStore::new(config.playback);
    let mut session = Session::new(store, io::stdin().lock(), io::stdout().lock());
    session.run()?;

    tracing::info!("Session ended");
    Ok(())
}
