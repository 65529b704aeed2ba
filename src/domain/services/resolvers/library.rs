//! Library entries: archives or class folders.
//!
//! `/project/tail` points into a workspace project (`/project` alone is the
//! whole project folder), other absolute paths are taken literally and
//! relative ones resolve against the current project.

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::services::ResolverContext;
use crate::error::ClasspathResult;

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let location = ctx.resolve_path(entry.path())?;
    ctx.add_classpath_entry(ResolvedClasspathEntry::new(location));
    Ok(())
}
