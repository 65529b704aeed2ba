//! User library container
//!
//! `org.eclipse.jdt.USER_LIBRARY/<name>` expands to the archives of a named
//! user library. System libraries go to the boot classpath instead.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::{RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::ports::ContainerResolver;
use crate::domain::services::ResolverContext;
use crate::domain::value_objects::ContainerPath;
use crate::error::{ClasspathError, ClasspathResult};

pub const USER_LIBRARY_CONTAINER: &str = "org.eclipse.jdt.USER_LIBRARY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLibrary {
    pub archives: Vec<PathBuf>,
    pub system: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UserLibraryContainerResolver {
    libraries: BTreeMap<String, UserLibrary>,
}

impl UserLibraryContainerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, name: impl Into<String>, library: UserLibrary) -> Self {
        self.libraries.insert(name.into(), library);
        self
    }
}

impl ContainerResolver for UserLibraryContainerResolver {
    fn name(&self) -> &str {
        "user-library"
    }

    fn can_resolve(&self, container: &ContainerPath<'_>) -> bool {
        container.id() == USER_LIBRARY_CONTAINER
    }

    fn resolve(
        &self,
        _entry: &RawClasspathEntry,
        container: &ContainerPath<'_>,
        ctx: &mut ResolverContext<'_>,
    ) -> ClasspathResult<()> {
        let name = container.segments().next().unwrap_or_default();
        let Some(library) = self.libraries.get(name) else {
            return Err(ClasspathError::UnknownUserLibrary {
                name: name.to_string(),
            });
        };

        if library.system {
            return ctx.add_boot_classpath_entry(ResolvedClasspathEntry::from_locations(
                library.archives.clone(),
            ));
        }

        for archive in &library.archives {
            ctx.add_classpath_entry(ResolvedClasspathEntry::new(archive.clone()));
        }
        Ok(())
    }
}
