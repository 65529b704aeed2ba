//! Command handlers

pub mod projects;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};

use classpath_resolver::config::Config;

/// Load the manifest with environment overrides, reporting unknown keys on stderr.
pub(crate) fn load_manifest(manifest: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(manifest)
        .with_context(|| format!("failed to load manifest {}", manifest.display()))?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    Ok(config.with_env_overrides())
}
