//! Source folders contribute their compiled output, with the source folder
//! attached for IDE-style lookups.

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::services::ResolverContext;
use crate::error::{ClasspathError, ClasspathResult};

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let project = ctx.require_current_project()?;

    let Some(output) = entry
        .output_location()
        .or_else(|| project.default_output_folder())
    else {
        return Err(ClasspathError::MissingOutputFolder {
            source_path: entry.path().to_string(),
            project: project.name().to_string(),
        });
    };

    let source_folder = ctx.resolve_path(entry.path())?;
    let output_folder = ctx.resolve_path(output)?;

    ctx.add_classpath_entry(
        ResolvedClasspathEntry::new(output_folder)
            .with_source_locations(vec![source_folder])
            .with_patterns(entry.includes().as_slice(), entry.excludes().as_slice()),
    );
    Ok(())
}
