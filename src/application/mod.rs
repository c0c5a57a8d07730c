//! Application layer - Use cases and port interfaces
//!
//! Contains the notification workflow and trait definitions
//! for external system interactions.

pub mod notify;
pub mod ports;

// Re-export use cases
pub use notify::{
    NotifyCallbacks, NotifyError, NotifyInput, NotifyOutcome, NotifyOutput, NotifyUseCase,
};
