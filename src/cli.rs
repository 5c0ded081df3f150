//! CLI definitions for the tour guide.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tourguide_config::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// Tour guide CLI.
#[derive(Parser)]
#[command(name = "tourguide")]
#[command(about = "Photograph an artwork or monument and hear its story")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.tourguide/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive guide session (default)
    Session,

    /// Describe an image file and save it to history
    Capture {
        /// Image file to analyze
        image: PathBuf,
    },

    /// Browse past captures
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Suggest landmarks near a position
    Suggest {
        /// Latitude (defaults to [location] in the config)
        #[arg(long, requires = "lon", allow_hyphen_values = true, value_parser = parse_latitude)]
        lat: Option<f64>,

        /// Longitude (defaults to [location] in the config)
        #[arg(long, requires = "lat", allow_hyphen_values = true, value_parser = parse_longitude)]
        lon: Option<f64>,
    },

    /// Read a description aloud
    Narrate {
        /// Record id, or its position in `history list`
        record: String,

        /// Playback volume between 0.0 and 1.0
        #[arg(long, value_parser = parse_volume)]
        volume: Option<f32>,
    },

    /// Share a description, or copy it to the clipboard
    Share {
        /// Record id, or its position in `history list`
        record: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum HistoryAction {
    /// List captures, newest first
    List,

    /// Show a capture; pending ones are analyzed again
    Open {
        /// Record id, or its position in `history list`
        record: String,
    },

    /// Write a capture's photo to a file
    Export {
        /// Record id, or its position in `history list`
        record: String,

        /// Destination file
        path: PathBuf,
    },
}

fn parse_in_range(value: &str, range: RangeInclusive<f64>) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    if !range.contains(&parsed) {
        return Err(format!(
            "must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
    Ok(parsed)
}

fn parse_latitude(value: &str) -> Result<f64, String> {
    parse_in_range(value, LATITUDE_RANGE)
}

fn parse_longitude(value: &str) -> Result<f64, String> {
    parse_in_range(value, LONGITUDE_RANGE)
}

fn parse_volume(value: &str) -> Result<f32, String> {
    parse_in_range(value, 0.0..=1.0).map(|v| v as f32)
}
