//! In-memory workspace
//!
//! Implements the workspace port over projects whose raw entries were already
//! parsed (from a manifest, a descriptor reader, or test code).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{EntryKind, RawClasspathEntry};
use crate::domain::ports::{Project, Workspace};

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceProject {
    name: String,
    folder: PathBuf,
    output: Option<String>,
    entries: Vec<RawClasspathEntry>,
}

impl WorkspaceProject {
    /// A project at `folder`. Relative folders are anchored at the workspace
    /// root when the project is added to an [`InMemoryWorkspace`].
    pub fn new(name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            output: None,
            entries: Vec::new(),
        }
    }

    /// Project-wide default output folder.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_entry(mut self, entry: RawClasspathEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = RawClasspathEntry>) -> Self {
        self.entries.extend(entries);
        self
    }
}

impl Project for WorkspaceProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn folder(&self) -> &Path {
        &self.folder
    }

    fn raw_classpath_entries(&self) -> &[RawClasspathEntry] {
        &self.entries
    }

    /// Explicit output if set, else the first declared output entry.
    fn default_output_folder(&self) -> Option<&str> {
        self.output.as_deref().or_else(|| {
            self.entries
                .iter()
                .find(|e| e.kind() == EntryKind::Output)
                .map(RawClasspathEntry::path)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspace {
    root: PathBuf,
    projects: BTreeMap<String, WorkspaceProject>,
}

impl InMemoryWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            projects: BTreeMap::new(),
        }
    }

    pub fn with_project(mut self, project: WorkspaceProject) -> Self {
        self.add_project(project);
        self
    }

    /// Add or replace a project, anchoring a relative folder at the root.
    pub fn add_project(&mut self, mut project: WorkspaceProject) {
        if project.folder.is_relative() {
            project.folder = self.root.join(&project.folder);
        }
        self.projects.insert(project.name.clone(), project);
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Workspace for InMemoryWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn project(&self, name: &str) -> Option<&dyn Project> {
        self.projects.get(name).map(|p| p as &dyn Project)
    }

    fn project_names(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }
}
