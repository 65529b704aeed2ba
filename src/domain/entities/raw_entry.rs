//! Raw classpath entry
//!
//! One declared line of a project's classpath, as produced by descriptor
//! parsing. Immutable once constructed.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of a raw classpath entry (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Source,
    Output,
    Library,
    Project,
    Container,
    Variable,
}

impl EntryKind {
    pub const ALL: [EntryKind; 6] = [
        EntryKind::Source,
        EntryKind::Output,
        EntryKind::Library,
        EntryKind::Project,
        EntryKind::Container,
        EntryKind::Variable,
    ];

    /// Descriptor vocabulary for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Source => "src",
            EntryKind::Output => "output",
            EntryKind::Library => "lib",
            EntryKind::Project => "project",
            EntryKind::Container => "con",
            EntryKind::Variable => "var",
        }
    }

    /// Parse a descriptor `kind` attribute.
    ///
    /// Accepts the Eclipse short forms and the spelled-out names.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "src" | "source" => Some(EntryKind::Source),
            "output" => Some(EntryKind::Output),
            "lib" | "library" => Some(EntryKind::Library),
            "project" => Some(EntryKind::Project),
            "con" | "container" => Some(EntryKind::Container),
            "var" | "variable" => Some(EntryKind::Variable),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of entry kinds an executor is willing to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryKindSet(u8);

impl EntryKindSet {
    pub fn all() -> Self {
        Self::of(&EntryKind::ALL)
    }

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(kinds: &[EntryKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, kind| set.with(*kind))
    }

    pub fn with(self, kind: EntryKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn without(self, kind: EntryKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    pub fn contains(&self, kind: EntryKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

impl Default for EntryKindSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Include or exclude patterns attached to a source entry.
///
/// Descriptors separate patterns with `|`; whitespace is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntryPatterns(Vec<String>);

impl EntryPatterns {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(|c: char| c == '|' || c.is_whitespace())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One declared classpath line.
///
/// Equality covers kind, path and output location only; the export flag and
/// filters are dispositions, not identity.
#[derive(Debug, Clone)]
pub struct RawClasspathEntry {
    kind: EntryKind,
    path: String,
    output_location: Option<String>,
    exported: bool,
    includes: EntryPatterns,
    excludes: EntryPatterns,
}

impl RawClasspathEntry {
    pub fn new(kind: EntryKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            output_location: None,
            exported: false,
            includes: EntryPatterns::default(),
            excludes: EntryPatterns::default(),
        }
    }

    pub fn source(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Source, path)
    }

    pub fn output(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, path)
    }

    pub fn library(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Library, path)
    }

    /// Reference to another workspace project. A leading `/` is added when missing.
    pub fn project(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = if name.starts_with('/') {
            name
        } else {
            format!("/{name}")
        };
        Self::new(EntryKind::Project, path)
    }

    pub fn container(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Container, path)
    }

    pub fn variable(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Variable, path)
    }

    /// Build an entry from descriptor attributes.
    ///
    /// Eclipse encodes project references as `kind="src"` with a
    /// `/projectname` path; those become [`EntryKind::Project`] entries.
    pub fn from_eclipse(kind: &str, path: &str) -> Option<Self> {
        let kind = EntryKind::parse(kind)?;
        if kind == EntryKind::Source && path.starts_with('/') {
            return Some(Self::project(path));
        }
        Some(Self::new(kind, path))
    }

    pub fn with_output_location(mut self, output: impl Into<String>) -> Self {
        self.output_location = Some(output.into());
        self
    }

    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn exported(self) -> Self {
        self.with_exported(true)
    }

    pub fn with_includes(mut self, patterns: &str) -> Self {
        self.includes = EntryPatterns::parse(patterns);
        self
    }

    pub fn with_excludes(mut self, patterns: &str) -> Self {
        self.excludes = EntryPatterns::parse(patterns);
        self
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn output_location(&self) -> Option<&str> {
        self.output_location.as_deref()
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn includes(&self) -> &EntryPatterns {
        &self.includes
    }

    pub fn excludes(&self) -> &EntryPatterns {
        &self.excludes
    }

    /// Referenced project name for project entries.
    pub fn project_name(&self) -> Option<&str> {
        match self.kind {
            EntryKind::Project => Some(self.path.trim_start_matches('/')),
            _ => None,
        }
    }
}

impl PartialEq for RawClasspathEntry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.path == other.path
            && self.output_location == other.output_location
    }
}

impl Eq for RawClasspathEntry {}

impl Hash for RawClasspathEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.path.hash(state);
        self.output_location.hash(state);
    }
}

impl fmt::Display for RawClasspathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.path)?;
        if let Some(output) = &self.output_location {
            write!(f, " -> {output}")?;
        }
        Ok(())
    }
}
