//! Configuration file sources, lowest to highest precedence.

pub mod global_file;
pub mod workspace_file;
