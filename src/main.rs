//! AI Tour Guide
//!
//! Main entry point for the tour guide CLI.

mod adapters;
mod cli;
mod cmd_capture;
mod cmd_history;
mod register;
mod render;
mod repl;

use std::path::Path;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

/// Initialize tracing with console and file output.
///
/// Log files are written to `<data_dir>/logs/` with daily rotation. The
/// console only shows warnings and errors so it does not interleave with
/// the guide's own output.
fn init_tracing(log_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tourguide")
        .filename_suffix("log")
        .max_log_files(14)
        .build(log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the worker alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::WARN),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = register::load_config(cli.config.as_deref())?;
    init_tracing(&config.storage.log_path())?;
    register::validate_config(&config)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => repl::run_session(&config).await,
        Commands::Capture { image } => cmd_capture::capture(&config, &image).await,
        Commands::History { action } => cmd_history::handle_history_command(&config, action).await,
        Commands::Suggest { lat, lon } => cmd_capture::suggest(&config, lat, lon).await,
        Commands::Narrate { record, volume } => {
            cmd_history::narrate(&config, &record, volume).await
        }
        Commands::Share { record } => cmd_history::share(&config, &record).await,
    }
}
