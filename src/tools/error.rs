//! Tool error types

use thiserror::Error;

/// Errors that can occur during tool execution
///
/// All of these are recovered at the executor boundary and folded into an
/// error-tagged [`ToolResult`](super::ToolResult); they never propagate out
/// of the agent loop.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Cannot access \"{path}\" as it is outside the permitted working directory")]
    OutsideRoot { path: String },

    #[error("File not found or is not a regular file: \"{path}\"")]
    NotFound { path: String },

    #[error("\"{path}\" is not a directory")]
    NotADirectory { path: String },

    #[error("\"{path}\" is a directory, not a file")]
    IsADirectory { path: String },

    #[error("\"{path}\" is not a Python file")]
    WrongExtension { path: String },

    #[error("Script timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Failed to launch script: {0}")]
    Launch(std::io::Error),

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
