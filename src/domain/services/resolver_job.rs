//! Resolver job
//!
//! Immutable configuration of one top-level resolution request.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::ports::Workspace;

/// Extra key/value arguments handed to container resolvers.
///
/// Keys are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerArguments(BTreeMap<String, String>);

impl ContainerArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_ascii_lowercase())
    }

    /// Arguments with lower-cased keys, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ContainerArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

#[derive(Clone)]
pub struct ResolverJob {
    root_project: String,
    workspace: Arc<dyn Workspace>,
    relative: bool,
    runtime: bool,
    arguments: ContainerArguments,
}

impl ResolverJob {
    pub fn new(root_project: impl Into<String>, workspace: Arc<dyn Workspace>) -> Self {
        Self {
            root_project: root_project.into(),
            workspace,
            relative: false,
            runtime: false,
            arguments: ContainerArguments::default(),
        }
    }

    /// Express locations under the workspace root relative to it.
    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Resolve the runtime rather than the compile-time classpath.
    pub fn with_runtime(mut self, runtime: bool) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_argument(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.arguments.insert(key, value);
        self
    }

    pub fn with_arguments(mut self, arguments: ContainerArguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn root_project(&self) -> &str {
        &self.root_project
    }

    pub fn workspace(&self) -> &dyn Workspace {
        self.workspace.as_ref()
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn is_runtime(&self) -> bool {
        self.runtime
    }

    pub fn arguments(&self) -> &ContainerArguments {
        &self.arguments
    }
}

impl fmt::Debug for ResolverJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverJob")
            .field("root_project", &self.root_project)
            .field("workspace", &self.workspace.root())
            .field("relative", &self.relative)
            .field("runtime", &self.runtime)
            .field("arguments", &self.arguments)
            .finish()
    }
}
