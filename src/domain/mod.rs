//! Domain layer - Core business logic
//!
//! Contains value objects and lookup tables.
//! This layer has no dependencies on external systems.

pub mod platform;
pub mod playback;
pub mod sound;

// Re-export common types
pub use platform::PlatformKind;
pub use playback::{CommandLine, Fallback, Mechanism, PlayerCommand};
pub use sound::SoundTarget;
