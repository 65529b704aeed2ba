//! JRE container
//!
//! `org.eclipse.jdt.launching.JRE_CONTAINER[/<vm-type>/<name>]` resolves to the
//! named (or default) Java runtime's libraries, contributed as the boot
//! classpath of the root project.

use std::path::PathBuf;

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::ports::ContainerResolver;
use crate::domain::services::ResolverContext;
use crate::domain::value_objects::ContainerPath;
use crate::error::{ClasspathError, ClasspathResult};

pub const JRE_CONTAINER: &str = "org.eclipse.jdt.launching.JRE_CONTAINER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntime {
    pub name: String,
    pub libraries: Vec<PathBuf>,
}

impl JavaRuntime {
    pub fn new(name: impl Into<String>, libraries: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            libraries,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JreContainerResolver {
    runtimes: Vec<JavaRuntime>,
    default: Option<String>,
}

impl JreContainerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runtime. The first registered runtime is the default until
    /// [`with_default`](Self::with_default) says otherwise.
    pub fn with_runtime(mut self, runtime: JavaRuntime) -> Self {
        if self.default.is_none() {
            self.default = Some(runtime.name.clone());
        }
        self.runtimes.push(runtime);
        self
    }

    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    fn runtime(&self, name: &str) -> Option<&JavaRuntime> {
        self.runtimes.iter().find(|r| r.name == name)
    }
}

impl ContainerResolver for JreContainerResolver {
    fn name(&self) -> &str {
        "jre"
    }

    fn can_resolve(&self, container: &ContainerPath<'_>) -> bool {
        container.id() == JRE_CONTAINER
    }

    fn resolve(
        &self,
        _entry: &RawClasspathEntry,
        container: &ContainerPath<'_>,
        ctx: &mut ResolverContext<'_>,
    ) -> ClasspathResult<()> {
        // Only the root project's runtime becomes the boot classpath.
        if !ctx.is_current_project_root() {
            return Ok(());
        }

        let requested = container.hint().or(self.default.as_deref());
        let Some(runtime) = requested.and_then(|name| self.runtime(name)) else {
            return Err(ClasspathError::UnknownJre {
                name: requested.unwrap_or("<default>").to_string(),
                container: container.as_str().to_string(),
            });
        };

        ctx.add_boot_classpath_entry(ResolvedClasspathEntry::from_locations(
            runtime.libraries.clone(),
        ))
    }
}
