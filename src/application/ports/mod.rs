//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod native;
pub mod probe;
pub mod runner;

// Re-export common types
pub use native::{NativeSound, NativeSoundError};
pub use probe::SystemProbe;
pub use runner::{CommandRunner, LaunchError};
