//! Tool system for the agent loop
//!
//! Tools give the model file system access and script execution inside a
//! working-directory sandbox. Paths are always interpreted relative to the
//! working root and may not escape it.

mod context;
mod error;
mod executor;
mod traits;

pub mod builtin;

pub use context::ToolContext;
pub use error::ToolError;
pub use executor::ToolExecutor;
pub use traits::{Tool, ToolResult};
