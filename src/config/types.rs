//! Manifest type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigWarning;
use crate::error::ClasspathResult;

use super::loader;

/// Resolution switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Unsupported entry kinds are fatal
    #[serde(default = "default_true")]
    pub strict: bool,

    #[serde(default)]
    pub runtime: bool,

    #[serde(default)]
    pub relative: bool,

    /// Entry kinds to resolve; all kinds when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<String>>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strict: true,
            runtime: false,
            relative: false,
            kinds: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A registered Java runtime for the JRE container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JreConfig {
    pub name: String,

    #[serde(default)]
    pub libraries: Vec<PathBuf>,

    #[serde(default)]
    pub default: bool,
}

/// A named user library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLibraryConfig {
    #[serde(default)]
    pub libraries: Vec<PathBuf>,

    /// Contribute to the boot classpath
    #[serde(default)]
    pub system: bool,
}

/// A container expanded from fixed path templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub prefix: String,

    #[serde(default)]
    pub paths: Vec<String>,

    #[serde(default)]
    pub boot: bool,

    #[serde(default)]
    pub compile_only: bool,

    #[serde(default)]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Defaults to the manifest's directory
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// One declared classpath line, in `.classpath` vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub kind: String,

    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default)]
    pub exported: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub including: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,

    /// Relative to the workspace root; defaults to the project name
    #[serde(default)]
    pub folder: Option<PathBuf>,

    /// Project-wide default output folder
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// Workspace manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Container arguments (keys case-insensitive)
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,

    #[serde(default)]
    pub variables: BTreeMap<String, PathBuf>,

    #[serde(default)]
    pub jres: Vec<JreConfig>,

    #[serde(default)]
    pub user_libraries: BTreeMap<String, UserLibraryConfig>,

    #[serde(default)]
    pub containers: Vec<ContainerConfig>,

    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl Config {
    /// Load a manifest, discarding warnings
    pub fn load(path: &Path) -> ClasspathResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load a manifest and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> ClasspathResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse manifest text; `origin` only labels errors and warnings
    pub fn parse(content: &str, origin: &Path) -> ClasspathResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, origin)
    }

    /// Apply `CLASSPATH_RESOLVER_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects.iter().find(|p| p.name == name)
    }
}
