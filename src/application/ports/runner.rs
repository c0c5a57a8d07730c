//! Command runner port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::playback::CommandLine;

/// Errors from running an external program
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{program} exited with status: {status}")]
    ExitStatus { program: String, status: String },

    #[error("Failed to launch {program}: {message}")]
    SpawnFailed { program: String, message: String },
}

/// Port for running an external program to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command quietly and wait for it to exit.
    ///
    /// # Returns
    /// Ok(()) if the program exited successfully, error otherwise
    async fn run(&self, command: &CommandLine) -> Result<(), LaunchError>;
}
