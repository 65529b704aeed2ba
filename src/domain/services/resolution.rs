//! Resolution results and per-run traversal state.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::ResolvedClasspath;

/// Non-fatal condition encountered while traversing the project graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionWarning {
    /// `project` was reached again while still on the traversal `stack`.
    CircularReference { project: String, stack: Vec<String> },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::CircularReference { project, stack } => {
                write!(f, "circular project reference: ")?;
                for name in stack {
                    write!(f, "{name} -> ")?;
                }
                write!(f, "{project}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClasspathResolution {
    pub classpath: ResolvedClasspath,
    /// Every project touched: fully traversed ones first (in visitation
    /// order), then those only recorded as referenced.
    pub referenced_projects: Vec<String>,
    pub warnings: Vec<ResolutionWarning>,
}

/// Mutable state of one resolution run. Created fresh per run and dropped
/// afterwards, so the executor itself stays stateless.
#[derive(Debug, Default)]
pub(crate) struct Traversal {
    stack: Vec<String>,
    resolved: HashSet<String>,
    resolved_order: Vec<String>,
    referenced: Vec<String>,
    pub(crate) classpath: ResolvedClasspath,
    warnings: Vec<ResolutionWarning>,
}

impl Traversal {
    pub(crate) fn current(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub(crate) fn stack(&self) -> &[String] {
        &self.stack
    }

    pub(crate) fn is_in_progress(&self, project: &str) -> bool {
        self.stack.iter().any(|p| p == project)
    }

    pub(crate) fn is_resolved(&self, project: &str) -> bool {
        self.resolved.contains(project)
    }

    /// Mark `project` resolved and push it. Marking happens before its
    /// entries are dispatched.
    pub(crate) fn enter(&mut self, project: &str) {
        if self.resolved.insert(project.to_string()) {
            self.resolved_order.push(project.to_string());
        }
        self.stack.push(project.to_string());
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }

    pub(crate) fn add_referenced_project(&mut self, project: &str) {
        if !self.referenced.iter().any(|p| p == project) {
            self.referenced.push(project.to_string());
        }
    }

    pub(crate) fn warn(&mut self, warning: ResolutionWarning) {
        self.warnings.push(warning);
    }

    pub(crate) fn referenced_projects(&self) -> Vec<String> {
        let mut projects = self.resolved_order.clone();
        for project in &self.referenced {
            if !self.resolved.contains(project) {
                projects.push(project.clone());
            }
        }
        projects
    }

    pub(crate) fn into_resolution(self) -> ClasspathResolution {
        ClasspathResolution {
            referenced_projects: self.referenced_projects(),
            classpath: self.classpath,
            warnings: self.warnings,
        }
    }
}
