//! History, narration and share subcommand handlers.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use tourguide_config::Config;
use tourguide_core::{GuideSession, NarrationController, PlaybackState, share_description, to_plain_text};

use crate::adapters::{TerminalShare, resolve_record, save_image};
use crate::cli::HistoryAction;
use crate::cmd_capture::with_loading_messages;
use crate::register;
use crate::render;

/// Handle history subcommands.
pub(crate) async fn handle_history_command(
    config: &Config,
    action: HistoryAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HistoryAction::List => history_list(config).await,
        HistoryAction::Open { record } => history_open(config, &record).await,
        HistoryAction::Export { record, path } => history_export(config, &record, &path).await,
    }
}

async fn history_list(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = register::open_history(config).await?;
    println!("{}", render::history(&store.load().await));
    Ok(())
}

async fn history_open(config: &Config, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = register::open_history(config).await?;
    let history = store.load().await;
    let record = resolve_record(&history, key).ok_or_else(|| format!("No history record '{}'", key))?;

    if !record.is_pending() {
        if let Some(text) = &record.description {
            println!("{}\n\n{}", render::image(&record.image_data_url), render::description(text));
        }
        return Ok(());
    }

    let id = record.id.clone();
    let mut session = GuideSession::open(
        store,
        register::normalizer(config),
        register::describer(config)?,
    )
    .await;
    let state = with_loading_messages(session.select_history(&id)).await;
    println!("{}", render::view(state));
    Ok(())
}

async fn history_export(
    config: &Config,
    key: &str,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = register::open_history(config).await?;
    let history = store.load().await;
    let record = resolve_record(&history, key).ok_or_else(|| format!("No history record '{}'", key))?;
    let written = save_image(&record.image_data_url, path).await?;
    println!("{}", render::status(&format!("Saved photo to {} ({} KB)", path.display(), written / 1024)));
    Ok(())
}

/// Description text of a described record.
async fn described_text(config: &Config, key: &str) -> Result<String, Box<dyn std::error::Error>> {
    let store = register::open_history(config).await?;
    let history = store.load().await;
    let record = resolve_record(&history, key).ok_or_else(|| format!("No history record '{}'", key))?;
    record
        .description
        .clone()
        .ok_or_else(|| "This capture has not been analyzed yet. Open it to retry.".into())
}

/// Read a record aloud until playback ends or Ctrl-C.
pub(crate) async fn narrate(
    config: &Config,
    key: &str,
    volume: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = described_text(config, key).await?;
    let volume = volume.unwrap_or(config.narration.volume);

    let mut narration = NarrationController::new(register::narrator(config), volume);
    narration.set_text(Some(to_plain_text(&text)));
    narration.play()?;
    info!("Narrating record {} at volume {:.2}", key, narration.volume());

    let mut ticker = tokio::time::interval(Duration::from_millis(200));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if narration.poll() == PlaybackState::Idle {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                narration.stop();
                break;
            }
        }
    }
    Ok(())
}

/// Share a record, falling back to the clipboard.
pub(crate) async fn share(config: &Config, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = described_text(config, key).await?;
    match share_description(&TerminalShare::detect(), &text).await {
        Ok(outcome) => {
            if let Some(message) = outcome.status_message() {
                eprintln!("{}", render::status(message));
            }
        }
        Err(e) => eprintln!("{}", render::error(&e.to_string())),
    }
    Ok(())
}
