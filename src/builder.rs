//! Model builder: merges explicit configuration over convention defaults.

use crate::capability::Capabilities;
use crate::config::RebelConfig;
use crate::conventions::{self, Defaults};
use crate::error::ResolveError;
use crate::model::{Model, Packaging, War, WebResource};
use crate::paths;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Builds the resolved [`Model`] from one frozen configuration snapshot.
///
/// Resolution is a pure transformation over the two inputs. No filesystem or
/// network access happens here; paths are resolved lexically against
/// `capabilities.base_dir` and are never checked for existence.
pub struct ModelBuilder<'a> {
    config: &'a RebelConfig,
    capabilities: &'a Capabilities,
}

impl<'a> ModelBuilder<'a> {
    /// Create a builder over a configuration and capability snapshot
    pub fn new(config: &'a RebelConfig, capabilities: &'a Capabilities) -> Self {
        Self {
            config,
            capabilities,
        }
    }

    /// Resolve the model.
    ///
    /// Merge semantics are explicit-over-default, field by field. Convention
    /// resolution runs first and its failure aborts the whole build.
    #[instrument(skip(self), fields(base_dir = %self.capabilities.base_dir.display()))]
    pub fn build(&self) -> Result<Model, ResolveError> {
        // Step 1: Resolve convention defaults (fails when the project has no
        // compilation support)
        let defaults = conventions::resolve(self.capabilities)?;
        debug!(packaging = ?defaults.packaging, "Resolved conventions");

        // Step 2: Packaging comes from conventions and is not user-overridable
        let packaging = defaults.packaging;

        // Step 3: Classpath, explicit entries over convention defaults
        let classpath = self.resolve_classpath(&defaults)?;

        // Step 4: War location, only under war packaging
        let war = match packaging {
            Packaging::War => Some(self.resolve_war(&defaults)?),
            Packaging::Jar => None,
        };

        // Step 5: Web resources in declaration order
        let web_resources = self.resolve_web_resources()?;

        let model = Model {
            packaging,
            classpath,
            war,
            web_resources,
        };

        info!(
            packaging = ?model.packaging,
            classpath_count = model.classpath.len(),
            web_resource_count = model.web_resources.len(),
            "Model resolved"
        );

        Ok(model)
    }

    /// Resolve the classpath directory list.
    ///
    /// Without explicit entries the convention defaults apply and the
    /// `add_resources_dir_to_rebel_xml` flag is inert (the resources directory
    /// is already part of the defaults). With explicit entries the user list
    /// is taken verbatim, except that the flag appends the default resources
    /// directory when the list does not already contain it.
    fn resolve_classpath(&self, defaults: &Defaults) -> Result<Vec<PathBuf>, ResolveError> {
        let base = &self.capabilities.base_dir;
        let mut resolved = Vec::new();

        let user_dirs = self
            .config
            .classpath
            .as_ref()
            .map(|classpath| classpath.directories.as_slice())
            .unwrap_or(&[]);

        if user_dirs.is_empty() {
            for dir in &defaults.classpath_dirs {
                let fixed = paths::fix_path(&dir.to_string_lossy(), base, "classpath default")?;
                push_unique(&mut resolved, fixed);
            }
            return Ok(resolved);
        }

        for (index, dir) in user_dirs.iter().enumerate() {
            let field = format!("classpath.directories[{}]", index);
            let fixed = paths::fix_path(dir, base, &field)?;
            push_unique(&mut resolved, fixed);
        }

        if self.config.add_resources_dir_to_rebel_xml {
            let resources_dir = paths::fix_path(
                &self.capabilities.default_resources_dir.to_string_lossy(),
                base,
                "classpath default",
            )?;
            push_unique(&mut resolved, resources_dir);
        }

        Ok(resolved)
    }

    /// Resolve the war location.
    ///
    /// Precedence: explicit `war.path`, then the `war_source_directory`
    /// option, then the convention default. The original string is stored
    /// untouched; only the resolved path is normalized.
    fn resolve_war(&self, defaults: &Defaults) -> Result<War, ResolveError> {
        let explicit_path = self.config.war.as_ref().and_then(|war| war.path.as_deref());

        let (original, field) = match (explicit_path, &self.config.war_source_directory) {
            (Some(path), _) => (path.to_string(), "war.path"),
            (None, Some(dir)) => (dir.clone(), "war_source_directory"),
            (None, None) => (
                defaults.war_source_dir.to_string_lossy().into_owned(),
                "war source default",
            ),
        };

        let resolved_path = paths::fix_path(&original, &self.capabilities.base_dir, field)?;

        Ok(War {
            original_path: original,
            resolved_path,
        })
    }

    /// Resolve web resource mappings, preserving declaration order
    fn resolve_web_resources(&self) -> Result<Vec<WebResource>, ResolveError> {
        let entries = self
            .config
            .web
            .as_ref()
            .map(|web| web.resources.as_slice())
            .unwrap_or(&[]);

        let mut resources = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let field = format!("web.resources[{}].directory", index);
            let directory = paths::fix_path(&entry.directory, &self.capabilities.base_dir, &field)?;

            // Include/exclude globs pass through untouched; matching them is
            // the reload agent's job. Empty lists mean match-all and
            // exclude-nothing.
            resources.push(WebResource {
                target: paths::normalize_target(&entry.target),
                directory,
                includes: entry.includes.clone(),
                excludes: entry.excludes.clone(),
            });
        }

        Ok(resources)
    }
}

/// Append a path unless an equal entry is already present, keeping first-seen
/// order
fn push_unique(list: &mut Vec<PathBuf>, path: PathBuf) {
    if !list.contains(&path) {
        list.push(path);
    }
}
