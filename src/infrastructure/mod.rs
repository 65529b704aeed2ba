//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `workspace` - In-memory workspace and projects
//! - `variables` - Map-backed variable registry
//! - `containers/` - Container sub-resolvers (JRE, user libraries, configured)

pub mod containers;
pub mod variables;
pub mod workspace;

// Re-export for convenience
pub use containers::{
    ConfiguredContainer, ConfiguredContainerResolver, JavaRuntime, JreContainerResolver,
    UserLibrary, UserLibraryContainerResolver, JRE_CONTAINER, USER_LIBRARY_CONTAINER,
};
pub use variables::ClasspathVariables;
pub use workspace::{InMemoryWorkspace, WorkspaceProject};
