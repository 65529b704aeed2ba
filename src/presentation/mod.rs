//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use classpath_resolver::presentation::factory;
//!
//! let use_case = factory::create_resolve_use_case(&config, manifest)?;
//! let resolution = use_case.resolve("app", factory::resolve_options(&config))?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::create_resolve_use_case;
pub use output::OutputFormat;
