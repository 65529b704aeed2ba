//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::MANIFEST_FILE;

/// Resolve Eclipse-style classpaths for projects in a workspace manifest
#[derive(Parser, Debug)]
#[command(name = "classpath-resolver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the classpath of a project
    Resolve {
        /// Root project name
        project: String,

        /// Path to the workspace manifest
        #[arg(short, long, default_value = MANIFEST_FILE)]
        manifest: PathBuf,

        /// Resolve the runtime classpath (skips compile-only containers)
        #[arg(long)]
        runtime: bool,

        /// Report locations relative to the workspace root
        #[arg(long)]
        relative: bool,

        /// Skip unsupported entry kinds instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// List the projects a project references, directly or transitively
    Projects {
        /// Root project name
        project: String,

        /// Path to the workspace manifest
        #[arg(short, long, default_value = MANIFEST_FILE)]
        manifest: PathBuf,
    },
}
