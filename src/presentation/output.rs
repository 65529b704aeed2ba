//! Output Rendering
//!
//! Text and JSON views of resolution results.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::services::{ClasspathResolution, ResolutionWarning};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// JSON shape of `resolve`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveReport<'a> {
    pub project: &'a str,
    pub classpath: Vec<PathBuf>,
    pub boot_classpath: Vec<PathBuf>,
    pub source_attachments: Vec<PathBuf>,
    pub referenced_projects: &'a [String],
    pub warnings: &'a [ResolutionWarning],
}

impl<'a> ResolveReport<'a> {
    pub fn new(project: &'a str, resolution: &'a ClasspathResolution) -> Self {
        Self {
            project,
            classpath: resolution.classpath.classpath_files(),
            boot_classpath: resolution.classpath.boot_classpath_files(),
            source_attachments: resolution.classpath.source_files(),
            referenced_projects: &resolution.referenced_projects,
            warnings: &resolution.warnings,
        }
    }
}

/// JSON shape of `projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsReport<'a> {
    pub project: &'a str,
    pub referenced_projects: &'a [String],
}

pub fn render_resolution(project: &str, resolution: &ClasspathResolution) -> String {
    let classpath = resolution.classpath.classpath_files();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Classpath for {} ({} {})",
        project,
        classpath.len(),
        plural(classpath.len(), "entry", "entries")
    );
    write_paths(&mut out, &classpath);

    let boot = resolution.classpath.boot_classpath_files();
    if !boot.is_empty() {
        out.push_str("\nBoot classpath\n");
        write_paths(&mut out, &boot);
    }

    let sources = resolution.classpath.source_files();
    if !sources.is_empty() {
        out.push_str("\nSource attachments\n");
        write_paths(&mut out, &sources);
    }

    if !resolution.warnings.is_empty() {
        out.push_str("\nWarnings\n");
        for warning in &resolution.warnings {
            let _ = writeln!(out, "  ! {warning}");
        }
    }
    out
}

pub fn render_projects(project: &str, referenced: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Projects referenced by {} ({})",
        project,
        referenced.len()
    );
    for name in referenced {
        let _ = writeln!(out, "  {name}");
    }
    out
}

fn write_paths(out: &mut String, paths: &[PathBuf]) {
    for path in paths {
        let _ = writeln!(out, "  {}", display(path));
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
