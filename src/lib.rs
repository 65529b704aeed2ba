//! classpath-resolver - Eclipse-style classpath resolution
//!
//! Turns the raw classpath declarations of a root project (sources, output
//! folders, libraries, project references, containers, variables) into an
//! ordered, de-duplicated list of concrete locations plus an optional boot
//! classpath, following project references transitively.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{
    EntryKind, EntryKindSet, RawClasspathEntry, ResolvedClasspath, ResolvedClasspathEntry,
};
pub use domain::ports::{ContainerResolver, Project, VariableRegistry, Workspace};
pub use domain::services::{
    ClasspathResolution, ClasspathResolver, ResolutionWarning, ResolverContext, ResolverJob,
};
pub use error::{ClasspathError, ClasspathResult};
pub use infrastructure::{ClasspathVariables, InMemoryWorkspace, WorkspaceProject};
