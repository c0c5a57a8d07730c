//! Native sound port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from OS-level sound facilities
#[derive(Debug, Clone, Error)]
pub enum NativeSoundError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("Playback failed: {0}")]
    Failed(String),
}

/// Port for sound facilities that need no external program
#[async_trait]
pub trait NativeSound: Send + Sync {
    /// Play a sound file through the OS API, blocking until it finishes
    async fn play_file(&self, path: &Path) -> Result<(), NativeSoundError>;

    /// Play the system default beep
    async fn message_beep(&self) -> Result<(), NativeSoundError>;

    /// Ring the terminal bell on stdout
    async fn terminal_bell(&self) -> Result<(), NativeSoundError>;
}
