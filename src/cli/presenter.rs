//! CLI presenter for output formatting

use colored::*;

use crate::application::NotifyOutcome;

/// Presenter for CLI output formatting.
///
/// Everything goes to stderr; stdout is reserved for the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    verbose: bool,
}

impl Presenter {
    /// Create a new presenter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether detail lines are shown
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print info message to stderr (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print a progress line to stderr (verbose only)
    pub fn detail(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "·".dimmed(), message);
        }
    }

    /// Print success message to stderr (verbose only)
    pub fn success(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Describe how a notification was delivered
    pub fn format_outcome(&self, outcome: &NotifyOutcome) -> String {
        match outcome {
            NotifyOutcome::Played { via } => format!("Played with {}", via),
            NotifyOutcome::Fallback { via } => format!("No sound file played, used {}", via),
        }
    }
}
