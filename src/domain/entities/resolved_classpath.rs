//! Resolved classpath accumulator
//!
//! Insertion-ordered, de-duplicated classpath plus a single boot classpath
//! slot. No resolved entry ever appears twice across the two.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::ResolvedClasspathEntry;
use crate::error::{ClasspathError, ClasspathResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedClasspath {
    classpath: Vec<ResolvedClasspathEntry>,
    boot_classpath: Option<ResolvedClasspathEntry>,
}

impl ResolvedClasspath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless an equal entry is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn add_classpath_entry(&mut self, entry: ResolvedClasspathEntry) -> bool {
        if self.boot_classpath.as_ref() == Some(&entry) || self.classpath.contains(&entry) {
            tracing::trace!(locations = ?entry.locations(), "skipping duplicate classpath entry");
            return false;
        }
        tracing::trace!(locations = ?entry.locations(), "adding classpath entry");
        self.classpath.push(entry);
        true
    }

    /// Set the boot classpath entry. Only one contribution is allowed per resolution.
    ///
    /// An equal entry already on the regular classpath moves to the boot slot.
    pub fn set_boot_classpath_entry(&mut self, entry: ResolvedClasspathEntry) -> ClasspathResult<()> {
        if let Some(existing) = &self.boot_classpath {
            return Err(ClasspathError::DuplicateBootClasspath {
                existing: existing.locations().to_vec(),
                rejected: entry.locations().to_vec(),
            });
        }
        self.classpath.retain(|e| e != &entry);
        self.boot_classpath = Some(entry);
        Ok(())
    }

    pub fn classpath(&self) -> &[ResolvedClasspathEntry] {
        &self.classpath
    }

    pub fn boot_classpath(&self) -> Option<&ResolvedClasspathEntry> {
        self.boot_classpath.as_ref()
    }

    pub fn has_boot_classpath(&self) -> bool {
        self.boot_classpath.is_some()
    }

    pub fn len(&self) -> usize {
        self.classpath.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classpath.is_empty() && self.boot_classpath.is_none()
    }

    /// Flattened classpath locations, first occurrence wins.
    pub fn classpath_files(&self) -> Vec<PathBuf> {
        flatten(self.classpath.iter().map(ResolvedClasspathEntry::locations))
    }

    pub fn boot_classpath_files(&self) -> Vec<PathBuf> {
        flatten(self.boot_classpath.iter().map(ResolvedClasspathEntry::locations))
    }

    /// Source attachments of all classpath entries, in classpath order.
    pub fn source_files(&self) -> Vec<PathBuf> {
        flatten(
            self.classpath
                .iter()
                .map(ResolvedClasspathEntry::source_locations),
        )
    }

    /// Classpath joined with the platform path-list separator.
    pub fn classpath_string(&self) -> ClasspathResult<String> {
        join(self.classpath_files())
    }

    pub fn boot_classpath_string(&self) -> ClasspathResult<String> {
        join(self.boot_classpath_files())
    }
}

fn flatten<'a>(groups: impl Iterator<Item = &'a [PathBuf]>) -> Vec<PathBuf> {
    let mut seen: HashSet<&PathBuf> = HashSet::new();
    let mut files = Vec::new();
    for group in groups {
        for path in group {
            if seen.insert(path) {
                files.push(path.clone());
            }
        }
    }
    files
}

fn join(files: Vec<PathBuf>) -> ClasspathResult<String> {
    let joined: OsString = std::env::join_paths(files)?;
    Ok(joined.to_string_lossy().into_owned())
}
