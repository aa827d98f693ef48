//! list_directory tool - list immediate entries of a directory

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// List files and directories in a path, non-recursively
pub struct ListDirectoryTool;

#[async_trait]
impl Tool for ListDirectoryTool {
    fn name(&self) -> &'static str {
        "list_directory"
    }

    fn description(&self) -> &'static str {
        "Lists files in the specified directory along with their sizes, constrained to the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory path relative to the working directory (default: .)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "ListDirectoryTool::execute: called");
        let path = input["path"].as_str().unwrap_or(".");

        let full_path = match ctx.validate_path(Path::new(path)) {
            Ok(p) => p,
            Err(e) => {
                debug!(%e, "ListDirectoryTool::execute: path validation failed");
                return ToolResult::error(e.to_string());
            }
        };

        let metadata = match tokio::fs::metadata(&full_path).await {
            Ok(m) => m,
            Err(_) => {
                return ToolResult::error(
                    ToolError::NotFound {
                        path: path.to_string(),
                    }
                    .to_string(),
                );
            }
        };

        if !metadata.is_dir() {
            return ToolResult::error(
                ToolError::NotADirectory {
                    path: path.to_string(),
                }
                .to_string(),
            );
        }

        let mut dir = match tokio::fs::read_dir(&full_path).await {
            Ok(d) => d,
            Err(e) => {
                debug!(%e, "ListDirectoryTool::execute: failed to read directory");
                return ToolResult::error(format!("Failed to read directory: {}", e));
            }
        };

        let mut lines = Vec::new();
        while let Ok(Some(entry)) = dir.next_entry().await {
            let name = entry.file_name().to_string_lossy().to_string();
            let metadata = match entry.metadata().await {
                Ok(m) => m,
                Err(_) => {
                    debug!(%name, "ListDirectoryTool::execute: failed to get metadata, skipping entry");
                    continue;
                }
            };

            let size = if metadata.is_file() { metadata.len() } else { 0 };
            lines.push(format!("- {}: file_size={} bytes, is_dir={}", name, size, metadata.is_dir()));
        }

        lines.sort();
        debug!(entries = %lines.len(), "ListDirectoryTool::execute: entries collected");

        if lines.is_empty() {
            ToolResult::success("(empty directory)")
        } else {
            ToolResult::success(lines.join("\n"))
        }
    }
}
