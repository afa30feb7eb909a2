//! Generation facade: the single entry point a host calls once its
//! configuration is finalized.
//!
//! One call drives the whole pass: resolve the model, render the descriptor,
//! compare with the previous file, and write atomically when needed. The pass
//! is deterministic over its two input snapshots, so a failure recurs
//! identically on retry and no retry policy exists.

use crate::builder::ModelBuilder;
use crate::capability::Capabilities;
use crate::config::RebelConfig;
use crate::error::{GenerateError, ResolveError};
use crate::guard;
use crate::model::Model;
use crate::xml;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What happened to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The descriptor was written to the given path
    Written(PathBuf),
    /// The previous descriptor was already up to date
    Unchanged,
}

/// Drives one resolution pass over frozen configuration and capability
/// snapshots.
pub struct Generator {
    config: RebelConfig,
    capabilities: Capabilities,
}

impl Generator {
    /// Create a generator over the given snapshots
    pub fn new(config: RebelConfig, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
        }
    }

    /// The configuration snapshot this generator resolves against
    pub fn config(&self) -> &RebelConfig {
        &self.config
    }

    /// The capability snapshot this generator resolves against
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Resolve the model without touching the filesystem
    pub fn model(&self) -> Result<Model, ResolveError> {
        ModelBuilder::new(&self.config, &self.capabilities).build()
    }

    /// Resolve the model and render the descriptor text
    pub fn render(&self) -> Result<String, ResolveError> {
        Ok(xml::render(&self.model()?))
    }

    /// Resolve, render, and write the descriptor file if needed.
    ///
    /// The previous file content decides whether a write happens at all (see
    /// [`guard::should_write`]). Writes go through a temporary sibling file
    /// and an atomic rename, so a failed write never leaves a partial
    /// descriptor in place.
    #[instrument(skip(self, output), fields(output = %output.display()))]
    pub fn generate_to(&self, output: &Path) -> Result<GenerateOutcome, GenerateError> {
        let text = self.render()?;

        if self.config.show_generated {
            info!(descriptor = %text, "Generated descriptor");
        }

        let previous = match fs::read_to_string(output) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(GenerateError::ReadPrevious {
                    path: output.to_path_buf(),
                    source: e,
                })
            }
        };

        if !guard::should_write(&text, previous.as_deref(), self.config.always_generate) {
            debug!("Descriptor unchanged, skipping write");
            return Ok(GenerateOutcome::Unchanged);
        }

        write_atomic(output, &text)?;
        info!(bytes = text.len(), "Descriptor written");
        Ok(GenerateOutcome::Written(output.to_path_buf()))
    }
}

/// Write content to a temporary sibling file, then rename over the target
fn write_atomic(path: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let temp_path = path.with_extension("xml.tmp");

    fs::write(&temp_path, content).map_err(|e| {
        // Clean up any partial temp file on error
        let _ = fs::remove_file(&temp_path);
        GenerateError::Write {
            path: temp_path.clone(),
            source: e,
        }
    })?;

    // Atomically rename temp file to final location
    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(&temp_path);
        GenerateError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(())
}
