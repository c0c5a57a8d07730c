//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{build_options, run_notify, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, NotifyOptions};
pub use presenter::Presenter;
