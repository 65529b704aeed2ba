//! Project references recurse into the referenced project's classpath.

use crate::domain::entities::RawClasspathEntry;
use crate::domain::services::ResolverContext;
use crate::error::{ClasspathError, ClasspathResult};

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let Some(name) = entry.project_name() else {
        return Err(ClasspathError::UnsupportedEntry {
            entry: entry.to_string(),
            project: ctx.current_project_name().unwrap_or_default().to_string(),
        });
    };

    if !ctx.workspace().has_project(name) {
        return Err(ClasspathError::UnknownProject {
            name: name.to_string(),
            referenced_from: ctx.current_project_name().map(str::to_string),
        });
    }

    ctx.resolve_project_classpath(name)
}
