//! Domain Layer
//!
//! The classpath resolution engine - pure logic over the workspace ports.
//!
//! ## Structure
//!
//! - `entities/` - Raw entries, resolved entries, the resolved classpath
//! - `value_objects/` - Path classification and identifier splitting
//! - `services/` - Resolver job, context, entry resolvers, executor
//! - `ports/` - Workspace, variable and container interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Resolution never touches the file system; locations are computed, not checked
//! 2. **Stateless executor** - Traversal state lives only for one `resolve` call
//! 3. **Ports & Adapters** - Projects, variables and containers come in through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
