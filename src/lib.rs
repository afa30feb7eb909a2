//! Rebelgen: Deterministic Reload-Descriptor Generation
//!
//! Resolves a project's hot-reload mapping from build capabilities and user
//! configuration, then renders and maintains its rebel.xml descriptor without
//! needless rewrites.

pub mod builder;
pub mod capability;
pub mod config;
pub mod conventions;
pub mod error;
pub mod generate;
pub mod guard;
pub mod logging;
pub mod model;
pub mod paths;
pub mod xml;
