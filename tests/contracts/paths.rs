//! Path classification contracts

use classpath_resolver::{ClasspathResolver, RawClasspathEntry};

use crate::common::*;

fn libraries(entries: &[&str]) -> std::sync::Arc<classpath_resolver::InMemoryWorkspace> {
    workspace([
        project("app").with_entries(entries.iter().map(|p| RawClasspathEntry::library(*p))),
        project("core").with_entry(RawClasspathEntry::source("src")),
    ])
}

/// CONTRACT: `/<project>/<tail>` is workspace-relative when the project exists
#[test]
fn contract_workspace_relative_library() {
    let resolution = resolve(&libraries(&["/core/lib/x.jar"]), "app").unwrap();
    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&["/ws/core/lib/x.jar"])
    );
}

/// CONTRACT: `/<name>` without a matching project is a filesystem path
#[test]
fn contract_unknown_first_segment_is_absolute() {
    let resolution = resolve(&libraries(&["/nothere", "/opt/lib/y.jar"]), "app").unwrap();
    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&["/nothere", "/opt/lib/y.jar"])
    );
}

/// CONTRACT: `/<project>` alone is that project's folder
#[test]
fn contract_project_as_library() {
    let resolution = resolve(&libraries(&["/core"]), "app").unwrap();
    assert_eq!(resolution.classpath.classpath_files(), paths(&["/ws/core"]));
}

/// CONTRACT: project-relative libraries resolve against the declaring project
#[test]
fn contract_project_relative_library() {
    let resolution = resolve(&libraries(&["lib/z.jar"]), "app").unwrap();
    assert_eq!(resolution.classpath.classpath_files(), paths(&["/ws/app/lib/z.jar"]));
}

/// CONTRACT: a source entry contributes its output folder, not itself
mod source_output {
    use super::*;

    #[test]
    fn contract_source_maps_to_default_output() {
        let workspace = workspace([project("app").with_entry(RawClasspathEntry::source("src"))]);
        let resolution = resolve(&workspace, "app").unwrap();

        assert_eq!(resolution.classpath.classpath_files(), paths(&["/ws/app/bin"]));
        assert_eq!(resolution.classpath.source_files(), paths(&["/ws/app/src"]));
    }

    #[test]
    fn contract_output_override_wins() {
        let workspace = workspace([project("app")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::source("test").with_output_location("test-bin"))]);
        let resolution = resolve(&workspace, "app").unwrap();

        assert_eq!(
            resolution.classpath.classpath_files(),
            paths(&["/ws/app/bin", "/ws/app/test-bin"])
        );
    }

    #[test]
    fn contract_output_entry_supplies_default_output() {
        let workspace = workspace([classpath_resolver::WorkspaceProject::new("app", "app")
            .with_entry(RawClasspathEntry::output("classes"))
            .with_entry(RawClasspathEntry::source("src"))]);
        let resolution = resolve(&workspace, "app").unwrap();

        assert_eq!(resolution.classpath.classpath_files(), paths(&["/ws/app/classes"]));
    }
}

/// CONTRACT: relative mode strips the workspace root only
#[test]
fn contract_relative_mode() {
    let workspace = workspace([
        project("app")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::library("/core/lib/x.jar"))
            .with_entry(RawClasspathEntry::library("/opt/y.jar")),
        project("core").with_entry(RawClasspathEntry::source("src")),
    ]);

    let resolution = ClasspathResolver::new()
        .resolve(&job(&workspace, "app").with_relative(true))
        .unwrap();

    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&["app/bin", "core/lib/x.jar", "/opt/y.jar"])
    );
}

/// CONTRACT: relative mode applies to every location under the root,
/// whatever entry kind produced it
#[test]
fn contract_relative_mode_covers_all_kinds() {
    use classpath_resolver::infrastructure::{ConfiguredContainer, ConfiguredContainerResolver};
    use classpath_resolver::ClasspathVariables;
    use std::sync::Arc;

    let workspace = workspace([project("app")
        .with_entry(RawClasspathEntry::source("src"))
        .with_entry(RawClasspathEntry::library("/ws/shared/x.jar"))
        .with_entry(RawClasspathEntry::variable("WS/lib/y.jar"))
        .with_entry(RawClasspathEntry::container("org.example.LOCAL"))]);

    let resolver = ClasspathResolver::new()
        .with_variables(Arc::new(ClasspathVariables::new().with("WS", "/ws")))
        .with_container_resolver(Arc::new(ConfiguredContainerResolver::new(
            ConfiguredContainer {
                prefix: "org.example.LOCAL".into(),
                paths: vec!["/ws/platform/a.jar".into(), "/opt/b.jar".into()],
                boot: false,
                compile_only: false,
                projects: Vec::new(),
            },
        )));

    let resolution = resolver
        .resolve(&job(&workspace, "app").with_relative(true))
        .unwrap();

    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&[
            "app/bin",
            "shared/x.jar",
            "lib/y.jar",
            "platform/a.jar",
            "/opt/b.jar",
        ])
    );
    assert_eq!(resolution.classpath.source_files(), paths(&["app/src"]));

    let absolute = resolver.resolve(&job(&workspace, "app")).unwrap();
    let files = absolute.classpath.classpath_files();
    assert_eq!(
        files[..3],
        paths(&["/ws/app/bin", "/ws/shared/x.jar", "/ws/lib/y.jar"])
    );
}
