//! Resolve command handler

use std::path::Path;

use anyhow::Result;

use classpath_resolver::presentation::factory;
use classpath_resolver::presentation::output::{render_resolution, OutputFormat, ResolveReport};

/// CLI switches layered over the manifest's `[resolver]` table
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveFlags {
    pub runtime: bool,
    pub relative: bool,
    pub lenient: bool,
}

pub fn cmd_resolve(project: &str, manifest: &Path, flags: ResolveFlags, json: bool) -> Result<()> {
    let mut config = super::load_manifest(manifest)?;
    if flags.lenient {
        config.resolver.strict = false;
    }

    let use_case = factory::create_resolve_use_case(&config, manifest)?;
    let mut options = factory::resolve_options(&config);
    options.runtime |= flags.runtime;
    options.relative |= flags.relative;

    let resolution = use_case.resolve(project, options)?;

    match OutputFormat::from_flag(json) {
        OutputFormat::Json => {
            let report = ResolveReport::new(project, &resolution);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print!("{}", render_resolution(project, &resolution));
        }
    }
    Ok(())
}
