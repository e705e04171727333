//! intraday CLI - watchlist price change since the previous close.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use config::BoardConfig;

#[derive(Parser)]
#[command(name = "intraday")]
#[command(about = "Watchlist price change since the previous close", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (TOML). Defaults to the built-in watchlist.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh periodically and print each frame
    Watch {
        /// Seconds between refreshes. Defaults to the config's refresh_secs.
        #[arg(short, long)]
        every: Option<u64>,
    },

    /// Refresh once and print the frame
    Snapshot,

    /// List the configured instruments
    Watchlist,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`, which wins
/// over the config's `log_level`.
fn init_tracing(verbose: u8, config_level: Option<&str>) {
    let level = match verbose {
        0 => config_level.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = BoardConfig::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.log_level.as_deref());

    match command {
        Commands::Watch { every } => {
            let every = every.map_or_else(|| config.refresh_every(), Duration::from_secs);
            anyhow::ensure!(!every.is_zero(), "--every must be positive");
            commands::watch::watch(&config, every).await
        }
        Commands::Snapshot => commands::snapshot::snapshot(&config).await,
        Commands::Watchlist => commands::watchlist::show_watchlist(&config),
    }
}
