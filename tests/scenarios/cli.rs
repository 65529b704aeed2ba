//! Scenario: driving the CLI against a manifest

use crate::common::*;

const MANIFEST: &str = r#"
[arguments]
platform = "/opt/platform"

[[containers]]
prefix = "org.example.PLATFORM"
paths = ["${platform}/core.jar"]
compile_only = true
projects = ["platform-api"]

[[projects]]
name = "app"
output = "bin"
entries = [
  { kind = "src", path = "src" },
  { kind = "src", path = "/core" },
  { kind = "con", path = "org.example.PLATFORM" },
]

[[projects]]
name = "core"
output = "bin"
entries = [
  { kind = "src", path = "src" },
  { kind = "var", path = "UNBOUND/x.jar" },
]
"#;

#[test]
fn cli_resolve_text() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run(&["resolve", "app"]);

    assert!(result.success, "resolve failed: {}", result.stderr);
    assert!(result.stdout.starts_with("Classpath for app (3 entries)"));
    assert!(result.stdout.contains("/opt/platform/core.jar"));
}

#[test]
fn cli_resolve_json_relative() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run(&["resolve", "app", "--relative", "--json"]);

    assert!(result.success, "resolve failed: {}", result.stderr);
    let json = result.json();
    assert_eq!(json["project"], "app");
    assert_eq!(
        json["classpath"],
        serde_json::json!(["app/bin", "core/bin", "/opt/platform/core.jar"])
    );
    assert_eq!(json["referenced_projects"], serde_json::json!(["app", "core", "platform-api"]));
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn cli_resolve_runtime_skips_compile_only_container() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run(&["resolve", "app", "--runtime", "--relative", "--json"]);

    assert!(result.success, "resolve failed: {}", result.stderr);
    assert_eq!(
        result.json()["classpath"],
        serde_json::json!(["app/bin", "core/bin"])
    );
}

#[test]
fn cli_env_overrides_manifest() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run_with_env(
        &["resolve", "app", "--json"],
        &[("CLASSPATH_RESOLVER_RELATIVE", "yes")],
    );

    assert!(result.success, "resolve failed: {}", result.stderr);
    assert_eq!(result.json()["classpath"][0], "app/bin");
}

#[test]
fn cli_projects() {
    let env = TestEnv::new(MANIFEST);

    let text = env.run(&["projects", "app"]);
    assert!(text.success, "projects failed: {}", text.stderr);
    assert_eq!(
        text.stdout,
        "Projects referenced by app (3)\n  app\n  core\n  platform-api\n"
    );

    let json = env.run(&["projects", "app", "--json"]).json();
    assert_eq!(
        json["referenced_projects"],
        serde_json::json!(["app", "core", "platform-api"])
    );
}

#[test]
fn cli_unknown_project_fails() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run(&["resolve", "ghost"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("reference to unknown project 'ghost'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn cli_unknown_manifest_key_warns() {
    let env = TestEnv::new(&format!("[resolver]\nstrikt = true\n{MANIFEST}"));
    let result = env.run(&["resolve", "app"]);

    assert!(result.success, "resolve failed: {}", result.stderr);
    assert!(
        result.stderr.contains("unknown key 'strikt'")
            && result.stderr.contains("did you mean 'strict'?"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn cli_missing_manifest_fails() {
    let env = TestEnv::new(MANIFEST);
    let result = env.run(&["resolve", "app", "--manifest", "nope.toml"]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to load manifest nope.toml"));
}

const RESTRICTED: &str = r#"
[resolver]
kinds = ["src", "project"]

[[projects]]
name = "app"
output = "bin"
entries = [
  { kind = "src", path = "src" },
  { kind = "lib", path = "lib/a.jar" },
]
"#;

#[test]
fn cli_restricted_kinds_are_strict_by_default() {
    let env = TestEnv::new(RESTRICTED);
    let result = env.run(&["resolve", "app"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("unsupported classpath entry 'lib:lib/a.jar'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn cli_lenient_skips_restricted_kinds() {
    let env = TestEnv::new(RESTRICTED);
    let result = env.run(&["resolve", "app", "--lenient", "--relative", "--json"]);

    assert!(result.success, "resolve failed: {}", result.stderr);
    assert_eq!(result.json()["classpath"], serde_json::json!(["app/bin"]));
}
