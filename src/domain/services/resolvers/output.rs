//! Output entries contribute their folder literally.

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::services::ResolverContext;
use crate::error::ClasspathResult;

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let folder = ctx.resolve_path(entry.path())?;
    ctx.add_classpath_entry(ResolvedClasspathEntry::new(folder));
    Ok(())
}
