//! Entry resolvers
//!
//! One resolver per raw entry kind. Dispatch is a match over the closed
//! [`EntryKind`] set, so exactly one resolver handles each entry.

mod container;
mod library;
mod output;
mod project;
mod source;
mod variable;

use crate::domain::entities::{EntryKind, RawClasspathEntry};
use crate::domain::services::ResolverContext;
use crate::error::ClasspathResult;

/// Resolve one raw entry of the current project into `ctx`.
///
/// Entries that are not visible from the current traversal position are
/// skipped before any resolver runs.
pub(crate) fn resolve_entry(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    if !ctx.is_visible(entry) {
        tracing::debug!(
            project = ctx.current_project_name().unwrap_or_default(),
            %entry,
            "skipping entry that is not exported"
        );
        return Ok(());
    }

    tracing::debug!(
        project = ctx.current_project_name().unwrap_or_default(),
        %entry,
        "resolving entry"
    );

    match entry.kind() {
        EntryKind::Source => source::resolve(entry, ctx),
        EntryKind::Output => output::resolve(entry, ctx),
        EntryKind::Library => library::resolve(entry, ctx),
        EntryKind::Project => project::resolve(entry, ctx),
        EntryKind::Container => container::resolve(entry, ctx),
        EntryKind::Variable => variable::resolve(entry, ctx),
    }
}
