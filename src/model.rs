//! Resolved descriptor model.
//!
//! The immutable result of merging user configuration over project
//! conventions. A model is constructed once by the builder, then either
//! rendered or discarded; it is never partially updated.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Packaging kind of the project, which determines which parts of the model
/// are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packaging {
    /// Plain compiled-output archive
    Jar,
    /// Web archive
    War,
}

/// Resolved war mapping, present only under [`Packaging::War`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct War {
    /// The path exactly as the user (or the convention default) supplied it
    pub original_path: String,
    /// The absolute resolved path
    pub resolved_path: PathBuf,
}

/// Resolved web-resource mapping: a source directory paired with a target
/// location inside the packaged web archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResource {
    /// Normalized target: single leading `/`, no trailing separator except
    /// for the root target itself
    pub target: String,
    /// Absolute source directory
    pub directory: PathBuf,
    /// Include globs, declaration order; empty means "match everything"
    pub includes: Vec<String>,
    /// Exclude globs, declaration order; empty means "exclude nothing"
    pub excludes: Vec<String>,
}

/// The resolved descriptor model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub packaging: Packaging,

    /// Absolute classpath directories, duplicates removed, insertion order
    /// preserved. Non-empty in every valid model: resolution fails outright
    /// for projects without compilation support.
    pub classpath: Vec<PathBuf>,

    /// Present if and only if `packaging` is [`Packaging::War`]
    pub war: Option<War>,

    /// Web-resource mappings in declaration order
    pub web_resources: Vec<WebResource>,
}
