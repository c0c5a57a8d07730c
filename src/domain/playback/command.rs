//! External command value objects

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// A known external program together with the arguments it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCommand {
    /// Executable name looked up on `PATH`
    pub program: &'static str,
    /// Arguments placed before the sound path (or the whole argv for speech)
    pub args: &'static [&'static str],
}

impl PlayerCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    /// Command line playing `path` with this program
    pub fn with_path(&self, path: &Path) -> CommandLine {
        self.to_command_line().arg(path)
    }

    /// Command line using only the fixed arguments
    pub fn to_command_line(&self) -> CommandLine {
        CommandLine::new(self.program).args(self.args.iter().copied())
    }
}

/// A fully built invocation handed to a command runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
