//! Scenario: a small plugin workspace wired through the library API

use std::sync::Arc;

use classpath_resolver::infrastructure::{
    ConfiguredContainer, ConfiguredContainerResolver, JavaRuntime, JreContainerResolver,
    UserLibrary, UserLibraryContainerResolver, JRE_CONTAINER, USER_LIBRARY_CONTAINER,
};
use classpath_resolver::{ClasspathError, ClasspathResolver, RawClasspathEntry};

use crate::common::*;

#[test]
fn scenario_exported_library_of_referenced_project() {
    let workspace = workspace([
        project("P1")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::project("P2").exported()),
        project("P2")
            .with_entry(RawClasspathEntry::library("/P2/lib/a.jar").exported())
            .with_entry(RawClasspathEntry::library("libnotexported.jar")),
    ]);

    let resolution = resolve(&workspace, "P1").unwrap();

    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&["/ws/P1/bin", "/ws/P2/lib/a.jar"])
    );
    assert!(resolution.classpath.boot_classpath().is_none());
    assert_eq!(resolution.referenced_projects, vec!["P1", "P2"]);
}

fn platform_resolver() -> ClasspathResolver {
    ClasspathResolver::new()
        .with_container_resolver(Arc::new(
            JreContainerResolver::new()
                .with_runtime(JavaRuntime::new("jdk-11", paths(&["/jvm/11/rt.jar"])))
                .with_runtime(JavaRuntime::new("jdk-17", paths(&["/jvm/17/jrt-fs.jar"]))),
        ))
        .with_container_resolver(Arc::new(UserLibraryContainerResolver::new().with_library(
            "junit",
            UserLibrary {
                archives: paths(&["/opt/junit/junit.jar", "/opt/junit/hamcrest.jar"]),
                system: false,
            },
        )))
        .with_container_resolver(Arc::new(ConfiguredContainerResolver::new(
            ConfiguredContainer {
                prefix: "org.example.PLATFORM".into(),
                paths: vec!["${platform}/plugins/core.jar".into()],
                boot: false,
                compile_only: true,
                projects: vec!["platform-api".into()],
            },
        )))
}

fn platform_workspace() -> std::sync::Arc<classpath_resolver::InMemoryWorkspace> {
    workspace([
        project("plugin")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::container(format!(
                "{JRE_CONTAINER}/StandardVMType/jdk-17"
            )))
            .with_entry(RawClasspathEntry::container(format!(
                "{USER_LIBRARY_CONTAINER}/junit"
            )))
            .with_entry(RawClasspathEntry::container("org.example.PLATFORM"))
            .with_entry(RawClasspathEntry::project("shared")),
        project("shared")
            .with_entry(RawClasspathEntry::source("src"))
            .with_entry(RawClasspathEntry::container(JRE_CONTAINER).exported()),
    ])
}

#[test]
fn scenario_containers_contribute_boot_and_classpath() {
    let resolution = platform_resolver()
        .resolve(
            &job(&platform_workspace(), "plugin").with_argument("Platform", "/opt/platform"),
        )
        .unwrap();

    assert_eq!(
        resolution.classpath.classpath_files(),
        paths(&[
            "/ws/plugin/bin",
            "/opt/junit/junit.jar",
            "/opt/junit/hamcrest.jar",
            "/opt/platform/plugins/core.jar",
            "/ws/shared/bin",
        ])
    );
    // The referenced project's JRE does not replace the root's.
    assert_eq!(
        resolution.classpath.boot_classpath_files(),
        paths(&["/jvm/17/jrt-fs.jar"])
    );
    assert_eq!(
        resolution.referenced_projects,
        vec!["plugin", "shared", "platform-api"]
    );
}

#[test]
fn scenario_runtime_classpath_skips_compile_only_containers() {
    let resolution = platform_resolver()
        .resolve(
            &job(&platform_workspace(), "plugin")
                .with_runtime(true)
                .with_argument("platform", "/opt/platform"),
        )
        .unwrap();

    assert!(!resolution
        .classpath
        .classpath_files()
        .contains(&"/opt/platform/plugins/core.jar".into()));
    assert_eq!(resolution.referenced_projects, vec!["plugin", "shared"]);
}

#[test]
fn scenario_missing_container_argument() {
    let err = platform_resolver()
        .resolve(&job(&platform_workspace(), "plugin"))
        .unwrap_err();

    assert!(matches!(
        err,
        ClasspathError::MissingContainerArgument { ref key, .. } if key == "platform"
    ));
}

#[test]
fn scenario_referenced_projects_query() {
    let projects = platform_resolver()
        .referenced_projects(
            &job(&platform_workspace(), "plugin").with_argument("platform", "/p"),
        )
        .unwrap();

    assert_eq!(projects, vec!["plugin", "shared", "platform-api"]);
}
