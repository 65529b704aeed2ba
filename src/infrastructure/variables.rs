//! Map-backed classpath variable registry.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::ports::VariableRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathVariables {
    bindings: HashMap<String, PathBuf>,
}

impl ClasspathVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        self.insert(name, location);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, location: impl Into<PathBuf>) {
        self.bindings.insert(name.into(), location.into());
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for ClasspathVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, location) in iter {
            variables.insert(name, location);
        }
        variables
    }
}

impl VariableRegistry for ClasspathVariables {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        self.bindings.get(name).cloned()
    }
}
