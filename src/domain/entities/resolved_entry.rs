//! Resolved classpath entry
//!
//! One concrete contribution to a classpath: the file-system locations it adds
//! plus, for source folders, where the sources live.

use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use serde::Serialize;

/// A resolved contribution. Identity is the location list.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedClasspathEntry {
    locations: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    source_locations: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    includes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    excludes: Vec<String>,
}

impl ResolvedClasspathEntry {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self::from_locations(vec![location.into()])
    }

    pub fn from_locations(locations: Vec<PathBuf>) -> Self {
        Self {
            locations,
            source_locations: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn with_source_locations(mut self, sources: Vec<PathBuf>) -> Self {
        self.source_locations = sources;
        self
    }

    /// Attach source-folder filters for downstream compilers.
    pub fn with_patterns(mut self, includes: &[String], excludes: &[String]) -> Self {
        self.includes = includes.to_vec();
        self.excludes = excludes.to_vec();
        self
    }

    /// Rewrite every location and source location with `f`.
    pub fn map_locations(mut self, f: impl Fn(PathBuf) -> PathBuf) -> Self {
        self.locations = self.locations.into_iter().map(&f).collect();
        self.source_locations = self.source_locations.into_iter().map(&f).collect();
        self
    }

    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    pub fn source_locations(&self) -> &[PathBuf] {
        &self.source_locations
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn has_source_attachment(&self) -> bool {
        !self.source_locations.is_empty()
    }
}

impl PartialEq for ResolvedClasspathEntry {
    fn eq(&self, other: &Self) -> bool {
        self.locations == other.locations
    }
}

impl Eq for ResolvedClasspathEntry {}

impl Hash for ResolvedClasspathEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locations.hash(state);
    }
}
