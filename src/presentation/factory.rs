//! Use Case Factory
//!
//! Builds the workspace, variable registry and container resolvers described
//! by a manifest and wires them into a `ResolveUseCase`.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::application::{ResolveOptions, ResolveUseCase};
use crate::config::{Config, EntryConfig, ProjectConfig};
use crate::domain::entities::{EntryKind, EntryKindSet, RawClasspathEntry};
use crate::domain::ports::ContainerResolver;
use crate::domain::services::{ClasspathResolver, ContainerArguments};
use crate::error::{ClasspathError, ClasspathResult};
use crate::infrastructure::{
    ClasspathVariables, ConfiguredContainer, ConfiguredContainerResolver, InMemoryWorkspace,
    JavaRuntime, JreContainerResolver, UserLibrary, UserLibraryContainerResolver,
    WorkspaceProject,
};

/// Create a resolve use case for the manifest at `manifest`.
///
/// Relative paths in the manifest are anchored to the manifest's directory and
/// a leading `~` expands to the home directory.
pub fn create_resolve_use_case(
    config: &Config,
    manifest: &Path,
) -> ClasspathResult<ResolveUseCase> {
    let base_dir = manifest_dir(manifest)?;
    let workspace = build_workspace(config, manifest)?;

    let resolver = ClasspathResolver::new()
        .with_strict(config.resolver.strict)
        .with_entry_kinds(entry_kinds(config, manifest)?)
        .with_variables(Arc::new(build_variables(config, &base_dir)))
        .with_container_resolvers(build_container_resolvers(config, &base_dir));

    let arguments: ContainerArguments = config
        .arguments
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    Ok(ResolveUseCase::new(Arc::new(workspace), resolver).with_arguments(arguments))
}

/// Manifest defaults for the per-request switches
pub fn resolve_options(config: &Config) -> ResolveOptions {
    ResolveOptions {
        runtime: config.resolver.runtime,
        relative: config.resolver.relative,
    }
}

/// Kinds named in `[resolver] kinds`, or every kind
pub fn entry_kinds(config: &Config, manifest: &Path) -> ClasspathResult<EntryKindSet> {
    let Some(kinds) = &config.resolver.kinds else {
        return Ok(EntryKindSet::all());
    };

    kinds.iter().try_fold(EntryKindSet::empty(), |set, name| {
        EntryKind::parse(name)
            .map(|kind| set.with(kind))
            .ok_or_else(|| ClasspathError::Config {
                file: manifest.to_path_buf(),
                message: format!("unknown entry kind '{name}' in [resolver] kinds"),
            })
    })
}

pub fn build_workspace(config: &Config, manifest: &Path) -> ClasspathResult<InMemoryWorkspace> {
    let base_dir = manifest_dir(manifest)?;
    let root = match &config.workspace.root {
        Some(root) => anchor(&base_dir, root),
        None => base_dir,
    };

    let mut workspace = InMemoryWorkspace::new(root);
    for project in &config.projects {
        workspace.add_project(build_project(project, manifest)?);
    }
    Ok(workspace)
}

fn build_project(config: &ProjectConfig, manifest: &Path) -> ClasspathResult<WorkspaceProject> {
    let folder = config
        .folder
        .as_ref()
        .map(|f| expand_home(f))
        .unwrap_or_else(|| PathBuf::from(&config.name));

    let mut project = WorkspaceProject::new(config.name.clone(), folder);
    if let Some(output) = &config.output {
        project = project.with_output(output.clone());
    }
    for entry in &config.entries {
        project = project.with_entry(build_entry(&config.name, entry, manifest)?);
    }
    Ok(project)
}

fn build_entry(
    project: &str,
    config: &EntryConfig,
    manifest: &Path,
) -> ClasspathResult<RawClasspathEntry> {
    let Some(mut entry) = RawClasspathEntry::from_eclipse(&config.kind, &config.path) else {
        return Err(ClasspathError::Config {
            file: manifest.to_path_buf(),
            message: format!(
                "project '{}' declares entry '{}' with unknown kind '{}'",
                project, config.path, config.kind
            ),
        });
    };

    if let Some(output) = &config.output {
        entry = entry.with_output_location(output.clone());
    }
    if let Some(including) = &config.including {
        entry = entry.with_includes(including);
    }
    if let Some(excluding) = &config.excluding {
        entry = entry.with_excludes(excluding);
    }
    Ok(entry.with_exported(config.exported))
}

pub fn build_variables(config: &Config, base_dir: &Path) -> ClasspathVariables {
    config
        .variables
        .iter()
        .map(|(name, path)| (name.clone(), anchor(base_dir, path)))
        .collect()
}

/// JRE first, then user libraries, then manifest containers in declaration order
pub fn build_container_resolvers(
    config: &Config,
    base_dir: &Path,
) -> Vec<Arc<dyn ContainerResolver>> {
    let mut resolvers: Vec<Arc<dyn ContainerResolver>> = Vec::new();

    if !config.jres.is_empty() {
        let mut jre = JreContainerResolver::new();
        for runtime in &config.jres {
            let libraries = runtime.libraries.iter().map(|p| anchor(base_dir, p)).collect();
            jre = jre.with_runtime(JavaRuntime::new(runtime.name.clone(), libraries));
            if runtime.default {
                jre = jre.with_default(runtime.name.clone());
            }
        }
        resolvers.push(Arc::new(jre));
    }

    if !config.user_libraries.is_empty() {
        let mut user = UserLibraryContainerResolver::new();
        for (name, library) in &config.user_libraries {
            let library = UserLibrary {
                archives: library.libraries.iter().map(|p| anchor(base_dir, p)).collect(),
                system: library.system,
            };
            user = user.with_library(name.clone(), library);
        }
        resolvers.push(Arc::new(user));
    }

    for container in &config.containers {
        let configured = ConfiguredContainer {
            prefix: container.prefix.clone(),
            paths: container.paths.clone(),
            boot: container.boot,
            compile_only: container.compile_only,
            projects: container.projects.clone(),
        };
        resolvers.push(Arc::new(ConfiguredContainerResolver::new(configured)));
    }

    resolvers
}

/// Absolute directory holding `manifest`; relative manifests are anchored at
/// the current directory.
fn manifest_dir(manifest: &Path) -> ClasspathResult<PathBuf> {
    let parent = manifest.parent().unwrap_or_else(|| Path::new(""));
    let dir = if parent.is_absolute() {
        parent.to_path_buf()
    } else {
        std::env::current_dir()?.join(parent)
    };
    Ok(dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

fn anchor(base_dir: &Path, path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}

/// Expand `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let path_str = path.display().to_string();
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if path_str == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    path.to_path_buf()
}
