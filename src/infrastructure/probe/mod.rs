//! Filesystem and PATH probing

mod path_probe;

pub use path_probe::PathProbe;
