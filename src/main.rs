//! classpath-resolver CLI
//!
//! Usage: classpath-resolver <COMMAND>
//!
//! Commands:
//!   resolve   Resolve the classpath of a project
//!   projects  List the projects a project references

use anyhow::Result;
use clap::Parser;

use classpath_resolver::presentation::{Cli, Commands};

mod commands;

/// Overrides the verbosity-derived filter when set
const LOG_ENV: &str = "CLASSPATH_RESOLVER_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            project,
            manifest,
            runtime,
            relative,
            lenient,
        } => commands::resolve::cmd_resolve(
            &project,
            &manifest,
            commands::resolve::ResolveFlags {
                runtime,
                relative,
                lenient,
            },
            cli.json,
        ),
        Commands::Projects { project, manifest } => {
            commands::projects::cmd_projects(&project, &manifest, cli.json)
        }
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}
