//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// chime - play a short notification sound
#[derive(Parser, Debug)]
#[command(name = "chime")]
#[command(version)]
#[command(about = "Play a short notification sound using whatever the system provides")]
#[command(long_about = None)]
pub struct Cli {
    /// Sound file to play instead of the platform default.
    ///
    /// Names starting with `-` are taken as the sound unless they spell a
    /// known flag. Only one sound may be given.
    #[arg(value_name = "SOUND", allow_hyphen_values = true)]
    pub sound: Option<String>,

    /// Report every playback attempt on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Parsed notify options
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub sound: Option<PathBuf>,
    pub verbose: bool,
}
