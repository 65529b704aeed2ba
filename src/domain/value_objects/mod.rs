//! Domain Value Objects
//!
//! Immutable views over the string paths carried by raw entries.

mod config_warning;
mod container_path;
mod library_path;

pub use config_warning::ConfigWarning;
pub use container_path::{ContainerPath, VariablePath};
pub use library_path::LibraryPath;
