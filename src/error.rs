//! Error types for classpath resolution
//!
//! Uses `thiserror` for library errors. Binary glue wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for classpath operations
pub type ClasspathResult<T> = Result<T, ClasspathError>;

/// Main error type for classpath operations
#[derive(Error, Debug)]
pub enum ClasspathError {
    /// A project entry (or the root of a job) names a project the workspace does not know
    #[error("reference to unknown project '{name}'{}", referenced_by(.referenced_from))]
    UnknownProject {
        name: String,
        referenced_from: Option<String>,
    },

    /// A variable entry names a variable with no bound location
    #[error("unbound classpath variable '{name}' in project '{project}'")]
    UnboundVariable { name: String, project: String },

    /// No registered container resolver claims the container
    #[error("no container resolver registered for '{container}' in project '{project}'")]
    UnclaimedContainer { container: String, project: String },

    /// No enabled resolver handles the entry kind (strict mode only)
    #[error("unsupported classpath entry '{entry}' in project '{project}'")]
    UnsupportedEntry { entry: String, project: String },

    /// A participating project declares no raw classpath entries
    #[error("project '{project}' has no classpath entries")]
    MissingClasspath { project: String },

    /// A second boot classpath contribution within one resolution
    #[error("boot classpath already set to {existing:?}, refusing {rejected:?}")]
    DuplicateBootClasspath {
        existing: Vec<PathBuf>,
        rejected: Vec<PathBuf>,
    },

    /// A source entry has no output override and its project has no default output folder
    #[error("no output folder for source entry '{source_path}' in project '{project}'")]
    MissingOutputFolder {
        source_path: String,
        project: String,
    },

    /// A JRE container names a runtime that is not registered
    #[error("unknown JRE '{name}' requested by container '{container}'")]
    UnknownJre { name: String, container: String },

    /// A user library container names a library that is not registered
    #[error("unknown user library '{name}'")]
    UnknownUserLibrary { name: String },

    /// A parameterized container references an argument the job does not carry
    #[error("container '{container}' requires argument '{key}'")]
    MissingContainerArgument { container: String, key: String },

    /// A non-domain failure raised while resolving one entry, enriched with context
    #[error("failed to resolve entry '{entry}' of project '{project}': {source}")]
    EntryFailed {
        entry: String,
        project: String,
        #[source]
        source: Box<ClasspathError>,
    },

    /// Invalid workspace manifest
    #[error("invalid manifest {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A resolved location cannot be joined into a platform path list
    #[error("cannot build path list: {0}")]
    PathList(#[from] std::env::JoinPathsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by an externally supplied collaborator
    #[error("{0}")]
    External(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ClasspathError {
    /// Wrap an arbitrary collaborator error.
    pub fn external(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::External(err.into())
    }

    /// Domain errors propagate through the traversal unchanged; everything
    /// else is wrapped once with the entry and project it surfaced from.
    pub fn is_domain(&self) -> bool {
        !matches!(
            self,
            ClasspathError::Io(_) | ClasspathError::PathList(_) | ClasspathError::External(_)
        )
    }
}

fn referenced_by(project: &Option<String>) -> String {
    match project {
        Some(project) => format!(" (referenced from '{project}')"),
        None => String::new(),
    }
}
