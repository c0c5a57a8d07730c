//! Sound target value object

use std::fmt;
use std::path::{Path, PathBuf};

/// A non-empty path to the sound resource played by this invocation.
///
/// "No sound found" is represented as `Option::<SoundTarget>::None`, never as an
/// empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundTarget {
    path: PathBuf,
}

impl SoundTarget {
    /// Create a target, rejecting empty paths
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return None;
        }
        Some(Self { path })
    }

    /// Get the underlying path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume into the underlying path
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for SoundTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Expand a leading `~` to `home`.
///
/// Only `~` on its own or followed by a path separator is expanded; `~user` forms
/// and paths without a leading tilde are returned untouched, as is everything when
/// no home directory is known.
pub fn expand_tilde(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(input);
    };

    if input == "~" {
        return home.to_path_buf();
    }

    match input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}
