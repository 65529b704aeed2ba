//! Workspace manifest
//!
//! Settings come from, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (CLASSPATH_RESOLVER_*)
//! 3. The manifest file (classpath.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{ENV_RELATIVE, ENV_RUNTIME, ENV_STRICT};
pub use types::{
    Config, ContainerConfig, EntryConfig, JreConfig, ProjectConfig, ResolverConfig,
    UserLibraryConfig, WorkspaceConfig,
};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "classpath.toml";
