//! Projects command handler
//!
//! Lists the projects reachable from a root project through project
//! references and project-contributing containers.

use std::path::Path;

use anyhow::Result;

use classpath_resolver::presentation::factory;
use classpath_resolver::presentation::output::{render_projects, OutputFormat, ProjectsReport};

pub fn cmd_projects(project: &str, manifest: &Path, json: bool) -> Result<()> {
    let config = super::load_manifest(manifest)?;
    let use_case = factory::create_resolve_use_case(&config, manifest)?;
    let referenced =
        use_case.referenced_projects(project, factory::resolve_options(&config))?;

    match OutputFormat::from_flag(json) {
        OutputFormat::Json => {
            let report = ProjectsReport {
                project,
                referenced_projects: &referenced,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print!("{}", render_projects(project, &referenced));
        }
    }
    Ok(())
}
