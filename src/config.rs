//! Configuration Tree
//!
//! User-facing configuration for descriptor generation. Deserialized from
//! layered TOML files (or constructed directly by the host) and treated as an
//! immutable snapshot once resolution starts. Tests included.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod loader;
mod merge;
mod sources;

pub use loader::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebelConfig {
    /// Keep the default resources directory on the classpath when the user
    /// supplies an explicit classpath list
    #[serde(default = "default_add_resources_dir")]
    pub add_resources_dir_to_rebel_xml: bool,

    /// Log the rendered descriptor text at info level
    #[serde(default)]
    pub show_generated: bool,

    /// Rewrite the output file even when its content is unchanged
    #[serde(default)]
    pub always_generate: bool,

    /// Override for the web-archive source directory (war packaging only)
    pub war_source_directory: Option<String>,

    /// War settings
    pub war: Option<WarConfig>,

    /// Web resource mappings
    pub web: Option<WebConfig>,

    /// Explicit classpath directories, replacing the convention defaults
    pub classpath: Option<ClasspathConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// War block: where the exploded web archive lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarConfig {
    /// Path to the war directory, relative to the project base or absolute
    pub path: Option<String>,
}

/// Web block: ordered resource mappings served by the reload agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default)]
    pub resources: Vec<WebResourceConfig>,
}

/// One web resource mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebResourceConfig {
    /// Deployment target inside the archive, e.g. "/" or "/WEB-INF/"
    #[serde(default)]
    pub target: String,

    /// Source directory for the mapping
    pub directory: String,

    /// Glob patterns to include (empty means match everything)
    #[serde(default)]
    pub includes: Vec<String>,

    /// Glob patterns to exclude (empty means exclude nothing)
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Classpath block: user-supplied directory entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClasspathConfig {
    #[serde(default)]
    pub directories: Vec<String>,
}

fn default_add_resources_dir() -> bool {
    true
}

impl Default for RebelConfig {
    fn default() -> Self {
        Self {
            add_resources_dir_to_rebel_xml: default_add_resources_dir(),
            show_generated: false,
            always_generate: false,
            war_source_directory: None,
            war: None,
            web: None,
            classpath: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    War(String),
    WebResource(usize, String),
    Classpath(usize, String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::War(msg) => {
                write!(f, "War: {}", msg)
            }
            ValidationError::WebResource(index, msg) => {
                write!(f, "Web resource #{}: {}", index, msg)
            }
            ValidationError::Classpath(index, msg) => {
                write!(f, "Classpath entry #{}: {}", index, msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl RebelConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Validate war block
        if let Some(war) = &self.war {
            if let Some(path) = &war.path {
                if path.is_empty() {
                    errors.push(ValidationError::War("path cannot be empty".to_string()));
                }
            }
        }
        if let Some(dir) = &self.war_source_directory {
            if dir.is_empty() {
                errors.push(ValidationError::War(
                    "war_source_directory cannot be empty".to_string(),
                ));
            }
        }

        // Validate web resources
        if let Some(web) = &self.web {
            for (index, resource) in web.resources.iter().enumerate() {
                if resource.directory.is_empty() {
                    errors.push(ValidationError::WebResource(
                        index,
                        "directory cannot be empty".to_string(),
                    ));
                }
            }
        }

        // Validate classpath entries
        if let Some(classpath) = &self.classpath {
            for (index, directory) in classpath.directories.iter().enumerate() {
                if directory.is_empty() {
                    errors.push(ValidationError::Classpath(
                        index,
                        "directory cannot be empty".to_string(),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
