//! System probe port interface

use std::path::{Path, PathBuf};

use crate::domain::playback::PlayerCommand;

/// Port for asking the host what is available before acting on it.
///
/// Kept synchronous: every query is a handful of `stat` calls.
pub trait SystemProbe: Send + Sync {
    /// Check whether a regular file exists at `path`
    fn file_exists(&self, path: &Path) -> bool;

    /// Locate an executable by name on `PATH`
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// Check whether an executable is on `PATH`
    fn is_available(&self, name: &str) -> bool {
        self.find_executable(name).is_some()
    }

    /// Return the first player whose program is on `PATH`
    fn first_available<'a>(&self, players: &'a [PlayerCommand]) -> Option<&'a PlayerCommand> {
        players.iter().find(|player| self.is_available(player.program))
    }

    /// Return the first candidate path that exists
    fn first_existing(&self, candidates: &[&str]) -> Option<PathBuf> {
        candidates
            .iter()
            .map(PathBuf::from)
            .find(|path| self.file_exists(path))
    }
}
