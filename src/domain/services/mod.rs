//! Domain Services
//!
//! The resolution engine: job configuration, the per-step resolver context,
//! the per-kind entry resolvers and the traversing executor.

mod classpath_resolver;
mod context;
mod resolution;
mod resolver_job;
mod resolvers;

pub use classpath_resolver::ClasspathResolver;
pub use context::ResolverContext;
pub use resolution::{ClasspathResolution, ResolutionWarning};
pub use resolver_job::{ContainerArguments, ResolverJob};
