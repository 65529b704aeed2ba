//! VariableRegistry port
//!
//! Classpath variables (`M2_REPO`, `ECLIPSE_HOME`, ...) are bound outside the
//! engine. The resolver only asks for the bound location.

use std::path::PathBuf;

pub trait VariableRegistry: Send + Sync {
    /// Location bound to `name`, or `None` when unbound.
    fn lookup(&self, name: &str) -> Option<PathBuf>;
}

/// Registry with no bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableRegistry for NoVariables {
    fn lookup(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}
