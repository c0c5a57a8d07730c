//! PATH-based system probe

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::ports::SystemProbe;

/// Extensions tried on Windows when `PATHEXT` is unset
#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Probe backed by the real filesystem and a `PATH`-style search list.
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Create a probe searching the process `PATH`
    pub fn new() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    /// Create with a custom search list (same syntax as `PATH`)
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Candidate file names for an executable
    #[cfg(windows)]
    fn executable_names(name: &str) -> Vec<String> {
        if Path::new(name).extension().is_some() {
            return vec![name.to_string()];
        }
        let pathext = env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
        pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!("{name}{ext}"))
            .collect()
    }

    #[cfg(not(windows))]
    fn executable_names(name: &str) -> Vec<String> {
        vec![name.to_string()]
    }
}

impl Default for PathProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether a path is a file the current user could execute
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl SystemProbe for PathProbe {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        let names = Self::executable_names(name);

        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| names.iter().map(move |n| dir.join(n)))
            .find(|candidate| is_executable(candidate))
    }
}
