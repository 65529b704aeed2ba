//! Common test utilities for contract, scenario and property tests.
//!
//! This module provides:
//! - Workspace builders over `InMemoryWorkspace`
//! - `TestEnv`: a manifest in a temp directory plus a CLI runner
//! - Probe container resolvers that record what they were asked to do

#![allow(dead_code)]

pub mod workspace;

pub use env::*;
pub use probes::*;
pub use workspace::*;
