//! Configured containers
//!
//! Containers declared in the workspace manifest: a prefix, a list of path
//! templates and a few flags. Templates may reference container arguments as
//! `${key}`.

use std::path::PathBuf;

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::ports::ContainerResolver;
use crate::domain::services::ResolverContext;
use crate::domain::value_objects::ContainerPath;
use crate::error::{ClasspathError, ClasspathResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredContainer {
    pub prefix: String,
    pub paths: Vec<String>,
    /// Contribute the paths as the boot classpath entry.
    pub boot: bool,
    /// Skip the container when resolving a runtime classpath.
    pub compile_only: bool,
    /// Projects recorded as referenced whenever the container is resolved.
    pub projects: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConfiguredContainerResolver {
    container: ConfiguredContainer,
}

impl ConfiguredContainerResolver {
    pub fn new(container: ConfiguredContainer) -> Self {
        Self { container }
    }
}

impl ContainerResolver for ConfiguredContainerResolver {
    fn name(&self) -> &str {
        &self.container.prefix
    }

    fn can_resolve(&self, container: &ContainerPath<'_>) -> bool {
        container.has_prefix(&self.container.prefix)
    }

    fn resolve(
        &self,
        _entry: &RawClasspathEntry,
        container: &ContainerPath<'_>,
        ctx: &mut ResolverContext<'_>,
    ) -> ClasspathResult<()> {
        if self.container.compile_only && ctx.is_runtime() {
            tracing::debug!(
                container = container.as_str(),
                "skipping compile-only container for runtime classpath"
            );
            return Ok(());
        }

        for project in &self.container.projects {
            ctx.add_referenced_project(project);
        }

        let mut locations = Vec::with_capacity(self.container.paths.len());
        for template in &self.container.paths {
            let expanded = expand_arguments(template, |key| ctx.container_argument(key))
                .map_err(|key| ClasspathError::MissingContainerArgument {
                    container: container.as_str().to_string(),
                    key,
                })?;
            locations.push(PathBuf::from(expanded));
        }

        if self.container.boot {
            return ctx.add_boot_classpath_entry(ResolvedClasspathEntry::from_locations(locations));
        }
        for location in locations {
            ctx.add_classpath_entry(ResolvedClasspathEntry::new(location));
        }
        Ok(())
    }
}

/// Replace `${key}` references using `lookup`. Returns the first missing key.
/// An unterminated `${` is kept literally.
pub(crate) fn expand_arguments<'a>(
    template: &str,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let key = &after[..end];
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => return Err(key.to_string()),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
