//! ANSI rendering of guide state.

use tourguide_core::{
    AppState, Block, Inline, PlaybackState, SuggestionsState, View, format_description, share_title,
};
use tourguide_protocols::{HistoryRecord, ImageDataUrl};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const ITALIC: &str = "\x1b[3m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn inline(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(text) => text.clone(),
            Inline::Emphasis(text) => format!("{ITALIC}{text}{RESET}"),
        })
        .collect()
}

/// Formatted description, labels highlighted and the anecdote boxed.
pub(crate) fn description(text: &str) -> String {
    let mut out = Vec::new();
    for block in format_description(text) {
        match block {
            Block::Break => out.push(String::new()),
            Block::Section {
                label,
                content,
                anecdote: true,
            } => {
                out.push(format!("{YELLOW}╭─ {BOLD}{label}{RESET}"));
                out.push(format!("{YELLOW}│{RESET} {}", inline(&content)));
                out.push(format!("{YELLOW}╰─{RESET}"));
            }
            Block::Section { label, content, .. } => {
                out.push(format!("{BOLD}{CYAN}{label}:{RESET} {}", inline(&content)));
            }
            Block::Paragraph(spans) => out.push(inline(&spans)),
        }
    }
    out.join("\n")
}

/// One-line summary of an image; terminals cannot show the picture itself.
pub(crate) fn image(image: &ImageDataUrl) -> String {
    match image.parts() {
        Some(parts) => format!(
            "{DIM}[{} image, {} KB]{RESET}",
            parts.mime_type,
            parts.data.len() * 3 / 4 / 1024
        ),
        None => format!("{DIM}[image]{RESET}"),
    }
}

pub(crate) fn loading(message: &str) -> String {
    format!("{DIM}… {message}{RESET}")
}

pub(crate) fn error(message: &str) -> String {
    format!("{RED}{message}{RESET}")
}

pub(crate) fn status(message: &str) -> String {
    format!("{GREEN}{message}{RESET}")
}

pub(crate) fn view(state: &AppState) -> String {
    match &state.view {
        View::Welcome => format!(
            "{BOLD}AI Tour Guide{RESET}\nPoint your camera at an artwork or monument. Type {BOLD}start{RESET} to begin."
        ),
        View::Capture => {
            "Camera ready. Type `capture <path>` to take a photo.".to_string()
        }
        View::Loading { image: shown } => match shown {
            Some(shown) => format!("{}\n{}", image(shown), loading("Analyzing your image...")),
            None => loading("Analyzing your image..."),
        },
        View::Result {
            image: shown,
            description: text,
        } => format!("{}\n\n{}", image(shown), description(text)),
        View::Error {
            image: shown,
            message,
        } => match shown {
            Some(shown) => format!("{}\n{}", image(shown), error(message)),
            None => error(message),
        },
    }
}

/// Captures listed newest first, numbered for `open <n>`.
/// The title line of a description, formatted like the description itself.
fn summary(text: &str) -> String {
    format_description(share_title(text))
        .into_iter()
        .find_map(|block| match block {
            Block::Section { label, content, .. } => {
                Some(format!("{BOLD}{label}:{RESET} {}", inline(&content)))
            }
            Block::Paragraph(spans) => Some(inline(&spans)),
            Block::Break => None,
        })
        .unwrap_or_default()
}

pub(crate) fn history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return format!("{DIM}No history yet.{RESET}");
    }
    records
        .iter()
        .rev()
        .enumerate()
        .map(|(i, record)| {
            let summary = match &record.description {
                Some(text) => summary(text),
                None => format!("{YELLOW}pending analysis{RESET}"),
            };
            format!("{:>3}. {summary} {DIM}({}){RESET}", i + 1, record.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn suggestions(state: &SuggestionsState) -> String {
    if state.loading {
        return loading("Finding nearby places...");
    }
    if let Some(message) = &state.error {
        return error(message);
    }
    if state.suggestions.is_empty() {
        return format!("{DIM}No suggestions found.{RESET}");
    }
    let mut out = vec![format!("{BOLD}Nearby places{RESET}")];
    out.extend(state.suggestions.iter().map(|name| format!("  • {name}")));
    out.join("\n")
}

pub(crate) fn playback(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "stopped",
        PlaybackState::Speaking => "playing",
        PlaybackState::Paused => "paused",
    }
}
