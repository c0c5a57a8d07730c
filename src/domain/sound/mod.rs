//! Sound domain module

mod candidates;
mod target;

pub use candidates::default_candidates;
pub use target::{expand_tilde, SoundTarget};
