//! Library path classification
//!
//! Library (and source/output) paths come in three mutually exclusive styles.
//! Classification depends on which project names the workspace knows.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryPath<'a> {
    /// A real file-system path, used as-is.
    Absolute(PathBuf),
    /// `/project[/tail]` where `project` is a workspace project.
    WorkspaceRelative {
        project: &'a str,
        tail: Option<&'a str>,
    },
    /// Relative to the project currently being traversed.
    ProjectRelative(&'a str),
}

impl<'a> LibraryPath<'a> {
    /// Classify `path`, asking `is_project` whether a leading segment names a
    /// workspace project.
    ///
    /// Order matters: a `/`-prefixed path is workspace-relative only when its
    /// first segment is a known project, otherwise it is absolute.
    pub fn classify(path: &'a str, is_project: impl Fn(&str) -> bool) -> Self {
        if let Some(rest) = path.strip_prefix('/') {
            let (first, tail) = match rest.split_once('/') {
                Some((first, tail)) => (first, Some(tail).filter(|t| !t.is_empty())),
                None => (rest, None),
            };
            if !first.is_empty() && is_project(first) {
                return LibraryPath::WorkspaceRelative {
                    project: first,
                    tail,
                };
            }
            return LibraryPath::Absolute(PathBuf::from(path));
        }

        if Path::new(path).is_absolute() {
            return LibraryPath::Absolute(PathBuf::from(path));
        }

        LibraryPath::ProjectRelative(path)
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, LibraryPath::Absolute(_))
    }
}
