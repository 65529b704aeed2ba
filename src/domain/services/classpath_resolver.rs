//! Classpath resolver
//!
//! Walks the project reference graph depth-first from the job's root project,
//! dispatching every raw entry to its kind's resolver and accumulating the
//! results. The resolver holds only configuration; each call to
//! [`ClasspathResolver::resolve`] runs on a fresh traversal state, so one
//! instance can serve concurrent resolutions.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::{EntryKind, EntryKindSet, RawClasspathEntry};
use crate::domain::ports::{ContainerResolver, NoVariables, VariableRegistry};
use crate::domain::services::resolution::{ClasspathResolution, ResolutionWarning, Traversal};
use crate::domain::services::resolvers;
use crate::domain::services::{ResolverContext, ResolverJob};
use crate::error::{ClasspathError, ClasspathResult};

#[derive(Clone)]
pub struct ClasspathResolver {
    variables: Arc<dyn VariableRegistry>,
    containers: Vec<Arc<dyn ContainerResolver>>,
    kinds: EntryKindSet,
    strict: bool,
}

impl ClasspathResolver {
    pub fn new() -> Self {
        Self {
            variables: Arc::new(NoVariables),
            containers: Vec::new(),
            kinds: EntryKindSet::all(),
            strict: true,
        }
    }

    pub fn with_variables(mut self, variables: Arc<dyn VariableRegistry>) -> Self {
        self.variables = variables;
        self
    }

    /// Register a container sub-resolver. Earlier registrations win.
    pub fn with_container_resolver(mut self, resolver: Arc<dyn ContainerResolver>) -> Self {
        self.containers.push(resolver);
        self
    }

    pub fn with_container_resolvers(
        mut self,
        resolvers: impl IntoIterator<Item = Arc<dyn ContainerResolver>>,
    ) -> Self {
        self.containers.extend(resolvers);
        self
    }

    /// Restrict dispatch to `kinds`. Other entries are an error in strict
    /// mode and skipped otherwise.
    pub fn with_entry_kinds(mut self, kinds: EntryKindSet) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Only follow project references and containers, leniently. Used to
    /// collect every touched project without building a classpath.
    pub fn referenced_projects_only(self) -> Self {
        self.with_entry_kinds(EntryKindSet::of(&[EntryKind::Project, EntryKind::Container]))
            .with_strict(false)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn entry_kinds(&self) -> EntryKindSet {
        self.kinds
    }

    pub fn variables(&self) -> &dyn VariableRegistry {
        self.variables.as_ref()
    }

    pub fn container_resolvers(&self) -> &[Arc<dyn ContainerResolver>] {
        &self.containers
    }

    /// Resolve the job's root project.
    ///
    /// Container sub-resolvers are initialized before and disposed after the
    /// traversal, once per call.
    pub fn resolve(&self, job: &ResolverJob) -> ClasspathResult<ClasspathResolution> {
        let mut initialized = 0;
        let mut outcome = Ok(());
        for container in &self.containers {
            if let Err(err) = container.initialize(job) {
                outcome = Err(err);
                break;
            }
            initialized += 1;
        }

        let result = outcome.and_then(|()| self.traverse(job));

        for container in self.containers[..initialized].iter().rev() {
            container.dispose();
        }
        result
    }

    /// Every project touched from the job's root, fully traversed ones first.
    pub fn referenced_projects(&self, job: &ResolverJob) -> ClasspathResult<Vec<String>> {
        let resolution = self.clone().referenced_projects_only().resolve(job)?;
        Ok(resolution.referenced_projects)
    }

    fn traverse(&self, job: &ResolverJob) -> ClasspathResult<ClasspathResolution> {
        let root = job.root_project();
        if !job.workspace().has_project(root) {
            return Err(ClasspathError::UnknownProject {
                name: root.to_string(),
                referenced_from: None,
            });
        }

        let mut traversal = Traversal::default();
        self.resolve_referenced_project(root, job, &mut traversal)?;

        let resolution = traversal.into_resolution();
        tracing::debug!(
            root,
            entries = resolution.classpath.len(),
            projects = resolution.referenced_projects.len(),
            "resolved classpath"
        );
        Ok(resolution)
    }

    pub(crate) fn resolve_referenced_project(
        &self,
        name: &str,
        job: &ResolverJob,
        traversal: &mut Traversal,
    ) -> ClasspathResult<()> {
        if traversal.is_in_progress(name) {
            let stack = traversal.stack().to_vec();
            tracing::warn!(
                project = name,
                stack = ?stack,
                "circular project reference, not following it again"
            );
            traversal.warn(ResolutionWarning::CircularReference {
                project: name.to_string(),
                stack,
            });
            return Ok(());
        }

        if traversal.is_resolved(name) {
            return Ok(());
        }

        let Some(project) = job.workspace().project(name) else {
            return Err(ClasspathError::UnknownProject {
                name: name.to_string(),
                referenced_from: traversal.current().map(str::to_string),
            });
        };

        traversal.enter(name);

        let entries = project.raw_classpath_entries();
        if entries.is_empty() {
            return Err(ClasspathError::MissingClasspath {
                project: name.to_string(),
            });
        }

        for entry in entries {
            self.dispatch(entry, job, traversal)
                .map_err(|err| enrich(err, entry, name))?;
        }

        traversal.leave();
        Ok(())
    }

    fn dispatch(
        &self,
        entry: &RawClasspathEntry,
        job: &ResolverJob,
        traversal: &mut Traversal,
    ) -> ClasspathResult<()> {
        if !self.kinds.contains(entry.kind()) {
            if self.strict {
                return Err(ClasspathError::UnsupportedEntry {
                    entry: entry.to_string(),
                    project: traversal.current().unwrap_or_default().to_string(),
                });
            }
            tracing::debug!(%entry, "no resolver enabled for entry kind, skipping");
            return Ok(());
        }

        let mut ctx = ResolverContext::new(self, job, traversal);
        resolvers::resolve_entry(entry, &mut ctx)
    }
}

impl Default for ClasspathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClasspathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let containers: Vec<&str> = self.containers.iter().map(|c| c.name()).collect();
        f.debug_struct("ClasspathResolver")
            .field("containers", &containers)
            .field("kinds", &self.kinds)
            .field("strict", &self.strict)
            .finish()
    }
}

fn enrich(err: ClasspathError, entry: &RawClasspathEntry, project: &str) -> ClasspathError {
    if err.is_domain() {
        return err;
    }
    ClasspathError::EntryFailed {
        entry: entry.to_string(),
        project: project.to_string(),
        source: Box::new(err),
    }
}
