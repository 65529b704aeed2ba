//! Resolve use case
//!
//! Runs classpath and referenced-project queries against one workspace with a
//! fixed resolver configuration.

use std::sync::Arc;

use crate::domain::ports::Workspace;
use crate::domain::services::{ClasspathResolution, ClasspathResolver, ContainerArguments, ResolverJob};
use crate::error::ClasspathResult;

/// Per-request switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub runtime: bool,
    pub relative: bool,
}

pub struct ResolveUseCase {
    workspace: Arc<dyn Workspace>,
    resolver: ClasspathResolver,
    arguments: ContainerArguments,
}

impl ResolveUseCase {
    pub fn new(workspace: Arc<dyn Workspace>, resolver: ClasspathResolver) -> Self {
        Self {
            workspace,
            resolver,
            arguments: ContainerArguments::default(),
        }
    }

    pub fn with_arguments(mut self, arguments: ContainerArguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn resolver(&self) -> &ClasspathResolver {
        &self.resolver
    }

    pub fn job(&self, project: &str, options: ResolveOptions) -> ResolverJob {
        ResolverJob::new(project, Arc::clone(&self.workspace))
            .with_runtime(options.runtime)
            .with_relative(options.relative)
            .with_arguments(self.arguments.clone())
    }

    pub fn resolve(
        &self,
        project: &str,
        options: ResolveOptions,
    ) -> ClasspathResult<ClasspathResolution> {
        self.resolver.resolve(&self.job(project, options))
    }

    pub fn referenced_projects(
        &self,
        project: &str,
        options: ResolveOptions,
    ) -> ClasspathResult<Vec<String>> {
        self.resolver
            .referenced_projects(&self.job(project, options))
    }

    pub fn project_names(&self) -> Vec<String> {
        self.workspace
            .project_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
