//! Listing Watcher CLI
//!
//! Single-run entry point, meant to be invoked by an external scheduler.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use listing_watcher::{
    error::Result,
    models::{Config, Credentials},
    pipeline,
    services::{HttpFetcher, TelegramNotifier},
    storage::{FileSeenStore, SeenStore},
};

/// Listing Watcher - new IDX listing notifier
#[derive(Parser, Debug)]
#[command(
    name = "listing-watcher",
    version,
    about = "Sends new IDX listing activity links to Telegram"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "listing-watcher.toml")]
    config: PathBuf,

    /// Override the seen-links file from the configuration
    #[arg(long)]
    seen_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the listings page and notify new links (default)
    Run {
        /// Report new links without sending or saving anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration and credentials
    Validate,

    /// Show configuration paths and seen-store size
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config);
    if let Some(path) = cli.seen_file {
        config.storage.seen_file = path;
    }
    config.validate()?;

    let store = FileSeenStore::new(&config.storage.seen_file);

    match cli.command.unwrap_or(Command::Run { dry_run: false }) {
        Command::Run { dry_run: true } => {
            let fetcher = HttpFetcher::new(&config.source)?;
            let summary = pipeline::run_preview(&config, &fetcher, &store).await?;
            log::info!(
                "Dry run: {} candidate links, {} new",
                summary.extracted,
                summary.new
            );
        }

        Command::Run { dry_run: false } => {
            // Secrets are checked before any network call.
            let credentials = Credentials::from_env()?;
            let fetcher = HttpFetcher::new(&config.source)?;
            let notifier = TelegramNotifier::new(&config.notifier, &credentials)?;

            pipeline::run_watch(&config, &fetcher, &store, &notifier).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            Credentials::from_env()?;
            log::info!("✓ Config OK (source, notifier, storage)");
            log::info!("✓ Credentials present");
        }

        Command::Info => {
            log::info!("Config file: {}", cli.config.display());
            log::info!("Listings page: {}", config.source.url);
            log::info!("Keywords: {}", config.source.keywords.join(", "));
            let seen = store.load().await?;
            log::info!("Seen store: {} ({} identifiers)", store.location(), seen.len());
        }
    }

    Ok(())
}
