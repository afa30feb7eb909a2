//! Loading facade: layered file sources merged into a [`RebelConfig`].

use crate::config::{merge, sources, RebelConfig};
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration from the standard layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root.
    ///
    /// Precedence, lowest to highest: merge policy defaults, the global file
    /// under the user's home, then the workspace files in the project root.
    pub fn load(project_root: &Path) -> Result<RebelConfig, ConfigError> {
        let mut builder = merge::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        builder = sources::workspace_file::add_to_builder(builder, project_root)?;

        let config: RebelConfig = builder.build()?.try_deserialize()?;
        debug!(
            project_root = %project_root.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a single explicit file.
    pub fn load_from_file(path: &Path) -> Result<RebelConfig, ConfigError> {
        merge::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Path to the global config file, when the home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}
