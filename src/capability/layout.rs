//! Capability detection from conventional JVM project layouts.
//!
//! Derives a capability snapshot from filesystem markers: source-set
//! directories decide which capabilities are present, and the build-system
//! marker file decides where default output directories live.

use crate::capability::{Capabilities, CapabilityProbe};
use crate::error::ProbeError;
use std::path::PathBuf;
use tracing::debug;

/// Source directories whose presence indicates compilation support.
const SOURCE_DIRS: &[&str] = &[
    "src/main/java",
    "src/main/kotlin",
    "src/main/groovy",
    "src/main/scala",
];

/// Conventional web-archive source directory.
const WAR_SOURCE_DIR: &str = "src/main/webapp";

/// Capability probe for conventional Maven- and Gradle-style project
/// directories.
pub struct LayoutProbe {
    base_dir: PathBuf,
    container_plugin: bool,
}

impl LayoutProbe {
    /// Create a probe for the given project base directory.
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            container_plugin: false,
        }
    }

    /// Mark a servlet-container plugin as active. Container presence is not
    /// derivable from directory layout, so hosts that know better say so here.
    pub fn with_container_plugin(mut self, active: bool) -> Self {
        self.container_plugin = active;
        self
    }
}

impl CapabilityProbe for LayoutProbe {
    fn probe(&self) -> Result<Capabilities, ProbeError> {
        if !self.base_dir.is_dir() {
            return Err(ProbeError::BaseDirNotFound(self.base_dir.clone()));
        }

        let base = dunce::canonicalize(&self.base_dir)?;

        let has_compilation_support = SOURCE_DIRS.iter().any(|dir| base.join(dir).is_dir());
        let has_war_packaging = base.join(WAR_SOURCE_DIR).is_dir();

        // Maven merges processed resources into the classes output; Gradle
        // keeps them apart. Gradle layout is also the fallback when no build
        // file is present.
        let (classes_dir, resources_dir) = if base.join("pom.xml").is_file() {
            ("target/classes", "target/classes")
        } else {
            ("build/classes/java/main", "build/resources/main")
        };

        debug!(
            base = %base.display(),
            compilation = has_compilation_support,
            war = has_war_packaging,
            container = self.container_plugin,
            "Probed project layout"
        );

        Ok(Capabilities {
            has_compilation_support,
            has_war_packaging,
            has_container_plugin: self.container_plugin,
            default_classes_dir: base.join(classes_dir),
            default_resources_dir: base.join(resources_dir),
            default_war_source_dir: base.join(WAR_SOURCE_DIR),
            base_dir: base,
        })
    }
}
