//! read_file tool - read file contents with a character budget

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// Read a file's contents, truncated to the context character budget
pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &'static str {
        "Reads and returns the content of a file within the working directory, truncated to the first 10000 characters."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "File path relative to the working directory"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "ReadFileTool::execute: called");
        let path = match input["path"].as_str() {
            Some(p) => p,
            None => return ToolResult::error(ToolError::InvalidArgument("path is required".to_string()).to_string()),
        };

        let full_path = match ctx.validate_path(Path::new(path)) {
            Ok(p) => p,
            Err(e) => {
                debug!(%e, "ReadFileTool::execute: path validation failed");
                return ToolResult::error(e.to_string());
            }
        };

        match tokio::fs::metadata(&full_path).await {
            Ok(m) if m.is_dir() => {
                return ToolResult::error(
                    ToolError::IsADirectory {
                        path: path.to_string(),
                    }
                    .to_string(),
                );
            }
            Ok(_) => {}
            Err(_) => {
                return ToolResult::error(
                    ToolError::NotFound {
                        path: path.to_string(),
                    }
                    .to_string(),
                );
            }
        }

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(c) => c,
            Err(e) => {
                debug!(%e, "ReadFileTool::execute: failed to read file");
                return ToolResult::error(format!("Error reading file \"{}\": {}", path, e));
            }
        };

        ToolResult::success(truncate_chars(&content, ctx.read_limit, path))
    }
}

/// Cut content at the character budget and append the truncation marker
///
/// The budget counts characters, not bytes, so a multi-byte character is
/// never split.
fn truncate_chars(content: &str, limit: usize, path: &str) -> String {
    match content.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            debug!(%limit, "truncate_chars: content exceeds budget");
            format!(
                "{}[...File \"{}\" truncated at {} characters]",
                &content[..byte_idx],
                path,
                limit
            )
        }
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_file_basic() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("test.txt"), "hello").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "test.txt"}), &ctx).await;

        assert!(!result.is_error);
        assert_eq!(result.content, "hello");
    }

    #[tokio::test]
    async fn test_read_file_at_limit_has_no_marker() {
        let temp = tempdir().unwrap();
        let content = "x".repeat(10_000);
        fs::write(temp.path().join("exact.txt"), &content).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "exact.txt"}), &ctx).await;

        assert!(!result.is_error);
        assert_eq!(result.content, content);
    }

    #[tokio::test]
    async fn test_read_file_over_limit_is_truncated() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("big.txt"), "y".repeat(10_001)).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "big.txt"}), &ctx).await;

        assert!(!result.is_error);
        let marker = "[...File \"big.txt\" truncated at 10000 characters]";
        assert!(result.content.ends_with(marker));
        assert_eq!(result.content.len(), 10_000 + marker.len());
    }

    #[tokio::test]
    async fn test_read_file_not_found() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "nonexistent.txt"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("not found"));
    }

    #[tokio::test]
    async fn test_read_file_is_a_directory() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "dir"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("is a directory"));
    }

    #[tokio::test]
    async fn test_read_file_outside_root() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = ReadFileTool;

        let result = tool.execute(serde_json::json!({"path": "../a.txt"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("outside the permitted working directory"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let content = "é".repeat(20);
        let truncated = truncate_chars(&content, 10, "u.txt");

        assert!(truncated.starts_with(&"é".repeat(10)));
        assert!(truncated.contains("truncated at 10 characters"));
    }
}
