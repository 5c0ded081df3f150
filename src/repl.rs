//! Interactive guide session.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use tourguide_config::Config;
use tourguide_core::{
    GuideSession, NarrationController, PlaybackState, SuggestionsPanel, View, share_description,
    to_plain_text,
};
use tourguide_image::FileCaptureDevice;
use tourguide_protocols::ShareTarget;

use crate::adapters::{TerminalShare, resolve_record, save_image};
use crate::cmd_capture::with_loading_messages;
use crate::register;
use crate::render;

const HELP: &str = "\
Commands:
  start            open the camera
  capture <path>   take a photo (an image file)
  retake           back to the camera from a result or error
  history          list past captures
  open <n|id>      show a past capture; pending ones are analyzed again
  close            hide the history list
  suggest          landmarks near your position
  play | pause | stop
  volume <0-1>     narration volume
  share            share the current description
  save <path>      write the current photo to a file
  help | quit";

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Start,
    Capture(PathBuf),
    Retake,
    History,
    Open(String),
    Close,
    Suggest,
    Play,
    Pause,
    Stop,
    Volume(f32),
    Share,
    Save(PathBuf),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let command = match word.to_lowercase().as_str() {
        "start" => Command::Start,
        "capture" | "snap" if !rest.is_empty() => Command::Capture(PathBuf::from(rest)),
        "capture" | "snap" => return Err("Usage: capture <path>".to_string()),
        "retake" => Command::Retake,
        "history" | "ls" => Command::History,
        "open" if !rest.is_empty() => Command::Open(rest.to_string()),
        "open" => return Err("Usage: open <n|id>".to_string()),
        "close" => Command::Close,
        "suggest" => Command::Suggest,
        "play" => Command::Play,
        "pause" => Command::Pause,
        "stop" => Command::Stop,
        "volume" => {
            let volume = rest
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| "Usage: volume <0.0-1.0>".to_string())?;
            Command::Volume(volume)
        }
        "share" => Command::Share,
        "save" if !rest.is_empty() => Command::Save(PathBuf::from(rest)),
        "save" => return Err("Usage: save <path>".to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{}'. Type `help`.", other)),
    };
    Ok(command)
}

struct Repl {
    session: GuideSession,
    suggestions: SuggestionsPanel,
    narration: NarrationController,
    share: Arc<dyn ShareTarget>,
}

impl Repl {
    /// Keep narration bound to the description on screen.
    fn sync_narration(&mut self) {
        let text = self.session.state().view.description().map(to_plain_text);
        self.narration.set_text(text);
    }

    fn show(&mut self) {
        self.sync_narration();
        println!("{}", render::view(self.session.state()));
    }

    async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Start => {
                if matches!(self.session.state().view, View::Welcome) {
                    self.session.start();
                }
                self.show();
            }
            Command::Capture(path) => {
                if !matches!(self.session.state().view, View::Capture) {
                    println!("Type `start` (or `retake`) to open the camera first.");
                    return true;
                }
                let device = FileCaptureDevice::new(path);
                if let Err(e) = with_loading_messages(self.session.capture_from(&device)).await {
                    println!("{}", render::error(&e.to_string()));
                    return true;
                }
                self.show();
            }
            Command::Retake => {
                self.session.retake();
                self.show();
            }
            Command::History => {
                self.session.show_history();
                println!("{}", render::history(&self.session.state().history));
            }
            Command::Open(key) => {
                let Some(id) = resolve_record(&self.session.state().history, &key).map(|r| r.id.clone())
                else {
                    println!("{}", render::error(&format!("No history record '{}'", key)));
                    return true;
                };
                with_loading_messages(self.session.select_history(&id)).await;
                self.show();
            }
            Command::Close => {
                self.session.hide_history();
            }
            Command::Suggest => {
                let state = self.suggestions.open().await;
                println!("{}", render::suggestions(state));
                self.suggestions.close();
            }
            Command::Play => {
                if self.narration.text().is_none() {
                    println!("Nothing to narrate yet.");
                } else if let Err(e) = self.narration.play() {
                    println!("{}", render::error(&e.to_string()));
                }
            }
            Command::Pause => {
                if let Err(e) = self.narration.pause() {
                    println!("{}", render::error(&e.to_string()));
                }
            }
            Command::Stop => self.narration.stop(),
            Command::Volume(volume) => {
                self.narration.set_volume(volume);
                println!("Volume {:.2}", self.narration.volume());
            }
            Command::Share => match self.session.state().view.description() {
                Some(text) => match share_description(self.share.as_ref(), text).await {
                    Ok(outcome) => {
                        if let Some(message) = outcome.status_message() {
                            println!("{}", render::status(message));
                        }
                    }
                    Err(e) => println!("{}", render::error(&e.to_string())),
                },
                None => println!("Nothing to share yet."),
            },
            Command::Save(path) => match self.session.state().view.image() {
                Some(image) => match save_image(image, &path).await {
                    Ok(written) => println!(
                        "{}",
                        render::status(&format!("Saved photo to {} ({} KB)", path.display(), written / 1024))
                    ),
                    Err(e) => println!("{}", render::error(&e.to_string())),
                },
                None => println!("No photo to save yet."),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
        }
        true
    }
}

/// Run the interactive session until `quit` or end of input.
pub(crate) async fn run_session(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let describer = register::describer(config)?;
    let session = GuideSession::open(
        register::open_history(config).await?,
        register::normalizer(config),
        describer.clone(),
    )
    .await;

    let mut repl = Repl {
        session,
        suggestions: SuggestionsPanel::new(register::locator(config, None), describer),
        narration: NarrationController::new(register::narrator(config), config.narration.volume),
        share: Arc::new(TerminalShare::detect()),
    };

    info!("Interactive session started");
    repl.show();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let before = repl.narration.playback();
        if before == PlaybackState::Speaking && repl.narration.poll() == PlaybackState::Idle {
            println!("{}", render::status("Narration finished."));
        }
        debug!("Narration {}", render::playback(repl.narration.playback()));

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if !repl.handle(command).await {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    repl.narration.stop();
    info!("Interactive session ended");
    Ok(())
}
