//! Variable entries: `NAME` or `NAME/tail`, expanded through the variable
//! registry.

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::services::ResolverContext;
use crate::domain::value_objects::VariablePath;
use crate::error::{ClasspathError, ClasspathResult};

pub(super) fn resolve(
    entry: &RawClasspathEntry,
    ctx: &mut ResolverContext<'_>,
) -> ClasspathResult<()> {
    let variable = VariablePath::parse(entry.path());

    let Some(bound) = ctx.variables().lookup(variable.name) else {
        return Err(ClasspathError::UnboundVariable {
            name: variable.name.to_string(),
            project: ctx.current_project_name().unwrap_or_default().to_string(),
        });
    };

    let location = match variable.tail {
        Some(tail) => bound.join(tail),
        None => bound,
    };
    ctx.add_classpath_entry(ResolvedClasspathEntry::new(location));
    Ok(())
}
