//! Domain Entities
//!
//! - `RawClasspathEntry` - A declared classpath line of a project
//! - `ResolvedClasspathEntry` - One concrete classpath contribution
//! - `ResolvedClasspath` - The de-duplicating accumulator returned by resolution

mod raw_entry;
mod resolved_classpath;
mod resolved_entry;

pub use raw_entry::{EntryKind, EntryKindSet, EntryPatterns, RawClasspathEntry};
pub use resolved_classpath::ResolvedClasspath;
pub use resolved_entry::ResolvedClasspathEntry;
