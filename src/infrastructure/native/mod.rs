//! Native sound adapters
//!
//! OS facilities that make noise without an external program: the Win32
//! sound APIs and the terminal bell.

mod bell;
#[cfg(windows)]
mod windows;

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{NativeSound, NativeSoundError};

/// Native sound implementation for the platform this binary was built for
pub struct PlatformSound;

impl PlatformSound {
    /// Create a new platform sound adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformSound {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeSound for PlatformSound {
    #[cfg(windows)]
    async fn play_file(&self, path: &Path) -> Result<(), NativeSoundError> {
        let path = path.to_path_buf();
        // PlaySound blocks until the sound ends
        tokio::task::spawn_blocking(move || windows::play_sound(&path))
            .await
            .map_err(|e| NativeSoundError::Failed(format!("Task join error: {}", e)))?
    }

    #[cfg(not(windows))]
    async fn play_file(&self, _path: &Path) -> Result<(), NativeSoundError> {
        Err(NativeSoundError::Unsupported("PlaySound"))
    }

    #[cfg(windows)]
    async fn message_beep(&self) -> Result<(), NativeSoundError> {
        windows::message_beep()
    }

    #[cfg(not(windows))]
    async fn message_beep(&self) -> Result<(), NativeSoundError> {
        Err(NativeSoundError::Unsupported("MessageBeep"))
    }

    async fn terminal_bell(&self) -> Result<(), NativeSoundError> {
        bell::ring(&mut io::stdout().lock())
            .map_err(|e| NativeSoundError::Failed(format!("terminal bell: {}", e)))
    }
}
