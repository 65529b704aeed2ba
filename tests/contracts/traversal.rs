//! Traversal contracts
//!
//! Each project participates at most once per resolution, cycles are
//! tolerated, and resolution state never leaks between runs.

use std::sync::Arc;

use crate::common::*;
use classpath_resolver::{ClasspathResolver, RawClasspathEntry, ResolutionWarning};

/// CONTRACT: idempotent traversal
///
/// A project reachable along two paths is dispatched once and its exported
/// entries appear once.
mod idempotent_traversal {
    use super::*;

    fn diamond() -> Arc<classpath_resolver::InMemoryWorkspace> {
        workspace([
            project("a")
                .with_entry(RawClasspathEntry::source("src"))
                .with_entry(RawClasspathEntry::project("b"))
                .with_entry(RawClasspathEntry::project("c")),
            project("b")
                .with_entry(RawClasspathEntry::source("src"))
                .with_entry(RawClasspathEntry::project("d").exported()),
            project("c")
                .with_entry(RawClasspathEntry::source("src"))
                .with_entry(RawClasspathEntry::project("d").exported()),
            project("d")
                .with_entry(RawClasspathEntry::library("lib/d.jar").exported())
                .with_entry(RawClasspathEntry::container("test.PROBE/d").exported()),
        ])
    }

    #[test]
    fn contract_shared_dependency_is_dispatched_once() {
        let probe = ProbeContainer::new();
        let resolver = ClasspathResolver::new().with_container_resolver(Arc::new(probe.clone()));

        let resolution = resolver.resolve(&job(&diamond(), "a")).unwrap();

        assert_eq!(probe.calls(), vec!["d"]);
        assert_eq!(
            resolution.classpath.classpath_files(),
            paths(&[
                "/ws/a/bin",
                "/ws/b/bin",
                "/ws/d/lib/d.jar",
                "/probe/d.jar",
                "/ws/c/bin",
            ])
        );
        assert_eq!(resolution.referenced_projects, vec!["a", "b", "d", "c"]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn contract_each_run_starts_fresh() {
        let probe = ProbeContainer::new();
        let resolver = ClasspathResolver::new().with_container_resolver(Arc::new(probe.clone()));
        let workspace = diamond();

        let first = resolver.resolve(&job(&workspace, "a")).unwrap();
        let second = resolver.resolve(&job(&workspace, "a")).unwrap();

        assert_eq!(first, second);
        assert_eq!(probe.calls(), vec!["d", "d"]);
        assert_eq!(probe.initialized(), 2);
        assert_eq!(probe.disposed(), 2);
    }

    #[test]
    fn contract_different_roots_share_one_resolver() {
        let resolver = ClasspathResolver::new()
            .with_container_resolver(Arc::new(ProbeContainer::new()));
        let workspace = diamond();

        let from_b = resolver.resolve(&job(&workspace, "b")).unwrap();
        let from_a = resolver.resolve(&job(&workspace, "a")).unwrap();

        assert_eq!(
            from_b.classpath.classpath_files(),
            paths(&["/ws/b/bin", "/ws/d/lib/d.jar", "/probe/d.jar"])
        );
        assert_eq!(from_a.classpath.len(), 5);
    }
}

/// CONTRACT: cycle safety
///
/// A cycle is reported as a warning and never followed twice.
mod cycle_safety {
    use super::*;

    #[test]
    fn contract_cycle_is_a_warning_not_an_error() {
        let workspace = workspace([
            project("a")
                .with_entry(RawClasspathEntry::source("src"))
                .with_entry(RawClasspathEntry::project("b")),
            project("b")
                .with_entry(RawClasspathEntry::source("src"))
                .with_entry(RawClasspathEntry::library("lib/b.jar").exported())
                .with_entry(RawClasspathEntry::project("a").exported()),
        ]);

        let resolution = resolve(&workspace, "a").unwrap();

        assert_eq!(
            resolution.classpath.classpath_files(),
            paths(&["/ws/a/bin", "/ws/b/bin", "/ws/b/lib/b.jar"])
        );
        assert_eq!(
            resolution.warnings,
            vec![ResolutionWarning::CircularReference {
                project: "a".into(),
                stack: vec!["a".into(), "b".into()],
            }]
        );
        assert_eq!(
            resolution.warnings[0].to_string(),
            "circular project reference: a -> b -> a"
        );
    }

    #[test]
    fn contract_self_reference_terminates() {
        let workspace = workspace([project("a")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::project("a"))]);

        let resolution = resolve(&workspace, "a").unwrap();

        assert_eq!(resolution.classpath.classpath_files(), paths(&["/ws/a/bin"]));
        assert_eq!(resolution.warnings.len(), 1);
    }
}

/// CONTRACT: depth-first pre-order
///
/// A referenced project's contributions land where the reference sits.
mod ordering {
    use super::*;

    #[test]
    fn contract_reference_contributions_are_inlined() {
        let workspace = workspace([
            project("app")
                .with_entry(RawClasspathEntry::library("lib/first.jar"))
                .with_entry(RawClasspathEntry::project("core"))
                .with_entry(RawClasspathEntry::library("lib/last.jar")),
            project("core").with_entry(RawClasspathEntry::source("src")),
        ]);

        let resolution = resolve(&workspace, "app").unwrap();

        assert_eq!(
            resolution.classpath.classpath_files(),
            paths(&["/ws/app/lib/first.jar", "/ws/core/bin", "/ws/app/lib/last.jar"])
        );
    }
}
