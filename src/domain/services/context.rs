//! Resolver context
//!
//! The narrow capability surface entry resolvers and container sub-resolvers
//! see for one traversal step: read the current project and job settings,
//! write resolved entries, and recurse into another project.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{EntryKind, RawClasspathEntry, ResolvedClasspathEntry};
use crate::domain::ports::{ContainerResolver, Project, VariableRegistry, Workspace};
use crate::domain::services::resolution::Traversal;
use crate::domain::services::{ClasspathResolver, ContainerArguments, ResolverJob};
use crate::domain::value_objects::LibraryPath;
use crate::error::{ClasspathError, ClasspathResult};

pub struct ResolverContext<'a> {
    resolver: &'a ClasspathResolver,
    job: &'a ResolverJob,
    traversal: &'a mut Traversal,
}

impl<'a> ResolverContext<'a> {
    pub(crate) fn new(
        resolver: &'a ClasspathResolver,
        job: &'a ResolverJob,
        traversal: &'a mut Traversal,
    ) -> Self {
        Self {
            resolver,
            job,
            traversal,
        }
    }

    pub fn job(&self) -> &'a ResolverJob {
        self.job
    }

    pub fn workspace(&self) -> &'a dyn Workspace {
        self.job.workspace()
    }

    pub fn current_project_name(&self) -> Option<&str> {
        self.traversal.current()
    }

    pub fn has_current_project(&self) -> bool {
        self.traversal.current().is_some()
    }

    pub fn current_project(&self) -> Option<&'a dyn Project> {
        let workspace = self.workspace();
        self.traversal
            .current()
            .and_then(|name| workspace.project(name))
    }

    pub(crate) fn require_current_project(&self) -> ClasspathResult<&'a dyn Project> {
        self.current_project()
            .ok_or_else(|| ClasspathError::external("no project is being traversed"))
    }

    /// Projects currently being traversed, outermost first.
    pub fn project_stack(&self) -> &[String] {
        self.traversal.stack()
    }

    pub fn is_current_project_root(&self) -> bool {
        self.traversal.current() == Some(self.job.root_project())
    }

    pub fn is_runtime(&self) -> bool {
        self.job.is_runtime()
    }

    pub fn is_workspace_relative(&self) -> bool {
        self.job.is_relative()
    }

    pub fn container_arguments(&self) -> &'a ContainerArguments {
        self.job.arguments()
    }

    pub fn container_argument(&self, key: &str) -> Option<&'a str> {
        self.job.arguments().get(key)
    }

    pub fn variables(&self) -> &'a dyn VariableRegistry {
        self.resolver.variables()
    }

    pub(crate) fn container_resolvers(&self) -> &'a [Arc<dyn ContainerResolver>] {
        self.resolver.container_resolvers()
    }

    /// Source entries are always visible. Anything else is visible when the
    /// owning project exports it or when it belongs to the root project.
    pub fn is_visible(&self, entry: &RawClasspathEntry) -> bool {
        entry.kind() == EntryKind::Source
            || entry.is_exported()
            || self.is_current_project_root()
    }

    /// Locations are passed through [`present`](Self::present) before the
    /// entry is accumulated.
    pub fn add_classpath_entry(&mut self, entry: ResolvedClasspathEntry) -> bool {
        let entry = entry.map_locations(|location| self.present(location));
        self.traversal.classpath.add_classpath_entry(entry)
    }

    pub fn add_boot_classpath_entry(
        &mut self,
        entry: ResolvedClasspathEntry,
    ) -> ClasspathResult<()> {
        let entry = entry.map_locations(|location| self.present(location));
        self.traversal.classpath.set_boot_classpath_entry(entry)
    }

    /// Record `project` as touched without walking its classpath.
    pub fn add_referenced_project(&mut self, project: &str) {
        self.traversal.add_referenced_project(project);
    }

    /// Walk `project`'s classpath into the shared accumulator, subject to the
    /// cycle and already-resolved checks.
    pub fn resolve_project_classpath(&mut self, project: &str) -> ClasspathResult<()> {
        self.resolver
            .resolve_referenced_project(project, self.job, self.traversal)
    }

    /// Location of `project`'s folder, relative to the workspace root in
    /// relative mode.
    pub fn project_location(&self, project: &dyn Project) -> PathBuf {
        self.present(project.folder().to_path_buf())
    }

    /// A resolved location as reported to the caller. In relative mode a
    /// location under the workspace root is expressed relative to it; the
    /// root itself becomes `.`. Anything else is returned unchanged.
    pub fn present(&self, location: PathBuf) -> PathBuf {
        if !self.is_workspace_relative() {
            return location;
        }
        match location.strip_prefix(self.workspace().root()) {
            Ok(relative) if relative.as_os_str().is_empty() => PathBuf::from("."),
            Ok(relative) => relative.to_path_buf(),
            Err(_) => location,
        }
    }

    /// Resolve a descriptor path against the workspace and current project.
    ///
    /// `/project/tail` resolves inside `project`, other `/`-prefixed or
    /// platform-absolute paths are taken literally, and anything else is
    /// relative to the current project.
    pub fn resolve_path(&self, path: &str) -> ClasspathResult<PathBuf> {
        let workspace = self.workspace();
        let resolved = match LibraryPath::classify(path, |name| workspace.has_project(name)) {
            LibraryPath::Absolute(path) => path,
            LibraryPath::WorkspaceRelative { project, tail } => {
                let project = workspace.project(project).ok_or_else(|| {
                    ClasspathError::UnknownProject {
                        name: project.to_string(),
                        referenced_from: self.current_project_name().map(str::to_string),
                    }
                })?;
                let root = self.project_location(project);
                match tail {
                    Some(tail) => root.join(tail),
                    None => root,
                }
            }
            LibraryPath::ProjectRelative(relative) => {
                let project = self.require_current_project()?;
                self.project_location(project).join(relative)
            }
        };
        Ok(resolved)
    }
}
