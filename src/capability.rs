//! Build-capability snapshots.
//!
//! The host captures which build features are active in the project exactly
//! once, at the "configuration finalized" point, and hands the core a frozen
//! [`Capabilities`] value. Resolution never queries the host again.

pub mod layout;

pub use layout::LayoutProbe;

use crate::error::ProbeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A read-only snapshot of the host project's build capabilities and default
/// output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether the project can compile anything at all. Without this there is
    /// no output to map and resolution fails.
    pub has_compilation_support: bool,

    /// Whether the project packages a web archive
    pub has_war_packaging: bool,

    /// Whether a servlet-container plugin is active (forces war packaging
    /// even when the archive task itself is absent)
    pub has_container_plugin: bool,

    /// Default compiled-classes output directory
    pub default_classes_dir: PathBuf,

    /// Default processed-resources output directory
    pub default_resources_dir: PathBuf,

    /// Default web-archive source directory
    pub default_war_source_dir: PathBuf,

    /// Project base directory; relative configuration paths resolve against
    /// this
    pub base_dir: PathBuf,
}

/// Source of [`Capabilities`] snapshots.
///
/// Hosts embedded in a build tool implement this against their own plugin
/// registry; [`LayoutProbe`] derives a snapshot from a conventional project
/// directory for standalone use.
pub trait CapabilityProbe {
    /// Capture the current capability snapshot.
    fn probe(&self) -> Result<Capabilities, ProbeError>;
}
