//! chime - play a short notification sound on any desktop OS
//!
//! Finds a platform notification sound (or uses the one given), plays it with
//! whatever audio player the system has, and falls back to a beep, a spoken
//! word, or the terminal bell when nothing can be played.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Platform kinds, sound targets, and playback tables
//! - **Application**: The notify use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (PATH probe, child processes, Win32)
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
