//! ContainerResolver port
//!
//! Classpath containers (JRE, user libraries, plugin dependencies, ...) are
//! expanded by externally supplied sub-resolvers. The container entry resolver
//! offers each container to the registered sub-resolvers in order; the first
//! one that claims it handles it exclusively.

use crate::domain::entities::RawClasspathEntry;
use crate::domain::services::{ResolverContext, ResolverJob};
use crate::domain::value_objects::ContainerPath;
use crate::error::ClasspathResult;

pub trait ContainerResolver: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    fn can_resolve(&self, container: &ContainerPath<'_>) -> bool;

    /// Expand the container by writing into `ctx`.
    ///
    /// Visibility has already been checked by the caller.
    fn resolve(
        &self,
        entry: &RawClasspathEntry,
        container: &ContainerPath<'_>,
        ctx: &mut ResolverContext<'_>,
    ) -> ClasspathResult<()>;

    /// Called once before a resolution session starts.
    fn initialize(&self, _job: &ResolverJob) -> ClasspathResult<()> {
        Ok(())
    }

    /// Called once after a resolution session ends, whether it failed or not.
    fn dispose(&self) {}
}
