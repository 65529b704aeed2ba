//! Workspace port
//!
//! Read-only view of the projects taking part in a resolution. Descriptor
//! parsing and workspace discovery live behind this boundary.

use std::path::Path;

use crate::domain::entities::RawClasspathEntry;

/// A project as seen by the resolver.
pub trait Project: Send + Sync {
    fn name(&self) -> &str;

    /// Absolute location of the project folder.
    fn folder(&self) -> &Path;

    /// Declared classpath, in declaration order.
    fn raw_classpath_entries(&self) -> &[RawClasspathEntry];

    /// Project-wide output folder, relative to the project unless `/`-prefixed.
    fn default_output_folder(&self) -> Option<&str>;
}

/// The set of known projects, queryable by name.
pub trait Workspace: Send + Sync {
    /// Directory relative resolution results are expressed against.
    fn root(&self) -> &Path;

    fn project(&self, name: &str) -> Option<&dyn Project>;

    fn has_project(&self, name: &str) -> bool {
        self.project(name).is_some()
    }

    fn project_names(&self) -> Vec<&str>;
}
