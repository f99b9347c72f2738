//! Terminal frontend for The Last Code.

mod commands;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tlc_core::GameConfig;
use tlc_core::config::DEFAULT_SAVE_FILE;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tlc",
    about = "The Last Code: an interactive text adventure in three scenarios",
    version,
    propagate_version = true
)]
struct Cli {
    /// Save file to read and write
    #[arg(long, global = true, default_value = DEFAULT_SAVE_FILE)]
    save: PathBuf,

    /// RNG seed for reproducible hospitals and forest encounters
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How long the victory screen stays up, in milliseconds
    #[arg(long, global = true, default_value = "5000")]
    victory_delay_ms: u64,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (the default)
    Play,

    /// Show the saved game
    Status,

    /// Delete the saved game
    Reset,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = GameConfig::default()
        .with_save_path(&cli.save)
        .with_victory_delay(Duration::from_millis(cli.victory_delay_ms));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(config),
        Commands::Status => commands::status::run(&cli.save),
        Commands::Reset => commands::reset::run(&cli.save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
