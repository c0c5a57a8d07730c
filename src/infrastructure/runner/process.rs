//! tokio-based command runner

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandRunner, LaunchError};
use crate::domain::playback::CommandLine;

/// Runs commands as child processes with all standard streams discarded.
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CommandLine) -> Result<(), LaunchError> {
        let program = command.program();

        let status = Command::new(program)
            .args(command.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LaunchError::NotFound(program.to_string())
                } else {
                    LaunchError::SpawnFailed {
                        program: program.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
