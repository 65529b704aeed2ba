//! Application Layer
//!
//! Use cases that orchestrate the resolution flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain resolution rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Classpath and referenced-project queries for one workspace

pub mod resolve;

pub use resolve::{ResolveOptions, ResolveUseCase};
