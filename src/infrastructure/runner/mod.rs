//! External process runner

mod process;

pub use process::ProcessRunner;
