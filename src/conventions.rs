//! Convention resolution: default values derived from build capabilities.
//!
//! Pure functions of the capability snapshot. Explicit configuration is
//! merged over these defaults by the model builder; nothing here looks at
//! user configuration.

use crate::capability::Capabilities;
use crate::error::ResolveError;
use crate::model::Packaging;
use std::path::PathBuf;

/// Defaults computed from a capability snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub packaging: Packaging,

    /// Default classpath directories: compiled classes, then processed
    /// resources
    pub classpath_dirs: Vec<PathBuf>,

    /// Default web-archive source directory, consulted under war packaging
    pub war_source_dir: PathBuf,
}

/// Compute conventions for the given snapshot.
///
/// Compilation support is the entry gate: a project that compiles nothing has
/// nothing to map, and resolution fails outright regardless of the other
/// capability flags. Past the gate, war packaging or an active container
/// plugin selects [`Packaging::War`]; everything else is [`Packaging::Jar`].
pub fn resolve(capabilities: &Capabilities) -> Result<Defaults, ResolveError> {
    if !capabilities.has_compilation_support {
        return Err(ResolveError::NoCompilationCapability);
    }

    let packaging = if capabilities.has_war_packaging || capabilities.has_container_plugin {
        Packaging::War
    } else {
        Packaging::Jar
    };

    // Compiled output is mapped for both packagings; a war still reloads its
    // classes and resources from the build output directories.
    let classpath_dirs = vec![
        capabilities.default_classes_dir.clone(),
        capabilities.default_resources_dir.clone(),
    ];

    Ok(Defaults {
        packaging,
        classpath_dirs,
        war_source_dir: capabilities.default_war_source_dir.clone(),
    })
}
