//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the resolution engine.
//! Infrastructure layer provides concrete implementations.

pub mod container_resolver;
pub mod variable_registry;
pub mod workspace;

pub use container_resolver::ContainerResolver;
pub use variable_registry::{NoVariables, VariableRegistry};
pub use workspace::{Project, Workspace};
