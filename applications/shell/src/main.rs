/// Clipshelf - interactive video catalog player
use clap::{Parser, Subcommand};
use clipshelf_core::VideoCatalog;
use clipshelf_player::StdConsole;
use clipshelf_shell::{build_player, Shell, ShellConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clipshelf")]
#[command(about = "Play, search, organize and moderate a video catalog", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (.txt or .json), overrides the configured path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for random playback
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Shell,
    /// Load and validate the catalog, then print the video count
    Check,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the shell keeps stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    if let Some(seed) = cli.seed {
        config.player.seed = Some(seed);
    }
    config.validate()?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&config)?,
        Commands::Check => check_catalog(&config)?,
    }

    Ok(())
}

fn run_shell(config: &ShellConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Clipshelf shell");

    let player = build_player(config, StdConsole::new())?;
    let mut shell = Shell::new(player);
    shell.run();

    Ok(())
}

fn check_catalog(config: &ShellConfig) -> anyhow::Result<()> {
    let catalog = clipshelf_core::load_catalog(&config.catalog.path)?;
    println!(
        "{}: {} videos",
        config.catalog.path.display(),
        catalog.len()
    );
    Ok(())
}
