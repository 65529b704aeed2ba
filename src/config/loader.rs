//! Manifest loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ClasspathError, ClasspathResult};

use super::types::Config;

pub const ENV_STRICT: &str = "CLASSPATH_RESOLVER_STRICT";
pub const ENV_RUNTIME: &str = "CLASSPATH_RESOLVER_RUNTIME";
pub const ENV_RELATIVE: &str = "CLASSPATH_RESOLVER_RELATIVE";

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ClasspathResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ClasspathResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ClasspathError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (CLASSPATH_RESOLVER_* prefix).
///
/// Unrecognized values leave the manifest setting untouched.
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Some(strict) = env_flag(ENV_STRICT) {
        config.resolver.strict = strict;
    }
    if let Some(runtime) = env_flag(ENV_RUNTIME) {
        config.resolver.runtime = runtime;
    }
    if let Some(relative) = env_flag(ENV_RELATIVE) {
        config.resolver.relative = relative;
    }
    config
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| parse_flag(&v))
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// First line (1-based) mentioning `needle`.
pub(super) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|index| index + 1)
}

/// Closest manifest key within edit distance 2; ties go to the earlier key.
pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolver",
        "strict",
        "runtime",
        "relative",
        "kinds",
        "arguments",
        "variables",
        "jres",
        "name",
        "libraries",
        "default",
        "user_libraries",
        "system",
        "containers",
        "prefix",
        "paths",
        "boot",
        "compile_only",
        "projects",
        "workspace",
        "root",
        "folder",
        "output",
        "entries",
        "kind",
        "path",
        "exported",
        "including",
        "excluding",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over chars, keeping a single row.
pub(super) fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &t) in target.iter().enumerate() {
            let substitution = diagonal + usize::from(source != t);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[target.len()]
}
