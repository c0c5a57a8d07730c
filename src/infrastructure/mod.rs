//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, child processes, and OS sound APIs.

pub mod native;
pub mod probe;
pub mod runner;

// Re-export adapters
pub use native::PlatformSound;
pub use probe::PathProbe;
pub use runner::ProcessRunner;
