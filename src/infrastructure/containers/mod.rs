//! Container sub-resolvers
//!
//! Implementations of the `ContainerResolver` port.

pub mod configured;
pub mod jre;
pub mod user_library;

pub use configured::{ConfiguredContainer, ConfiguredContainerResolver};
pub use jre::{JavaRuntime, JreContainerResolver, JRE_CONTAINER};
pub use user_library::{UserLibrary, UserLibraryContainerResolver, USER_LIBRARY_CONTAINER};
