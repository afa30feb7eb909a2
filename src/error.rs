//! Error types for descriptor resolution and generation.

use std::path::PathBuf;
use thiserror::Error;

/// Resolution errors raised while merging configuration over conventions.
///
/// Resolution is a pure computation over a frozen snapshot, so these are never
/// retried: the same input fails the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The project has no compilation capability, so there is no compiled
    /// output to map and no descriptor to generate.
    #[error("project has no compilation capability, nothing to map")]
    NoCompilationCapability,

    /// A configuration field that must name a path was an empty string.
    #[error("empty path given for {field}")]
    EmptyPath { field: String },
}

/// Errors from inspecting a project directory for build capabilities.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("project base directory not found: {0}")]
    BaseDirNotFound(PathBuf),

    #[error("failed to inspect project layout: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level errors for the generate entry point.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to read previous descriptor {path}: {source}")]
    ReadPrevious {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write descriptor {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for GenerateError {
    fn from(err: config::ConfigError) -> Self {
        GenerateError::Config(err.to_string())
    }
}
