//! Binary entry point for `psycare`.
//!
//! This module provides the command-line interface for PsyCare with options
//! for configuration file paths and logging verbosity. It initializes the
//! necessary components and starts an interactive session.

use clap::Parser;
use psycare::base::{config::Config, types::Void};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// PsyCare – a supportive mental health chat companion.
///
/// Configuration can come from `config.toml` or environment variables
/// prefixed with `PSYCARE_`. Describe how you are feeling and PsyCare
/// replies with coping ideas, suggests a professional, or shows crisis
/// resources when a message signals acute risk.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, PsyCare will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: WARN level
    /// - -v: INFO level
    /// - -vv: DEBUG level
    /// - -vvv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the psycare binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the session.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.
    //
    // Logs go to stderr so they do not interleave with the conversation on stdout.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry().with(level_filter).with(stderr).init();

    let config = Config::load(args.config.as_deref())?;

    psycare::start(config).await
}
