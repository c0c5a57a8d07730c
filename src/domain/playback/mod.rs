//! Playback domain module
//!
//! Declarative per-platform tables of how to play a file and what to do when
//! that fails.

mod command;
mod mechanism;

pub use command::{CommandLine, PlayerCommand};
pub use mechanism::{fallback_mechanisms, playback_mechanisms, Fallback, Mechanism};
