//! Workspace builders.

use std::path::PathBuf;
use std::sync::Arc;

use classpath_resolver::{
    ClasspathResolution, ClasspathResolver, ClasspathResult, InMemoryWorkspace, ResolverJob,
    WorkspaceProject,
};

pub const ROOT: &str = "/ws";

/// A project at `/ws/<name>` with default output `bin`.
pub fn project(name: &str) -> WorkspaceProject {
    WorkspaceProject::new(name, name).with_output("bin")
}

pub fn workspace(projects: impl IntoIterator<Item = WorkspaceProject>) -> Arc<InMemoryWorkspace> {
    let mut workspace = InMemoryWorkspace::new(ROOT);
    for project in projects {
        workspace.add_project(project);
    }
    Arc::new(workspace)
}

pub fn job(workspace: &Arc<InMemoryWorkspace>, root: &str) -> ResolverJob {
    ResolverJob::new(root, workspace.clone())
}

/// Resolve `root` with a default resolver.
pub fn resolve(
    workspace: &Arc<InMemoryWorkspace>,
    root: &str,
) -> ClasspathResult<ClasspathResolution> {
    ClasspathResolver::new().resolve(&job(workspace, root))
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
