//! Container entries are handed to the first registered sub-resolver that
//! claims them.

use crate::domain::entities::RawClasspathEntry;
use crate::domain::services::ResolverContext;
use crate::domain::value_objects::ContainerPath;
use crate::error::{ClasspathError, ClasspathResult};

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let container = ContainerPath::parse(entry.path());

    let Some(resolver) = ctx
        .container_resolvers()
        .iter()
        .find(|r| r.can_resolve(&container))
    else {
        return Err(ClasspathError::UnclaimedContainer {
            container: container.as_str().to_string(),
            project: ctx.current_project_name().unwrap_or_default().to_string(),
        });
    };

    tracing::debug!(
        container = container.as_str(),
        resolver = resolver.name(),
        "expanding container"
    );
    resolver.resolve(entry, &container, ctx)
}
