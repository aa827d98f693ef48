//! run_script tool - execute a Python script inside the working root

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// File extension accepted by the script runner
const SCRIPT_EXTENSION: &str = ".py";

/// Execute a Python file as a subprocess with a hard wall-clock timeout
///
/// The script's own exit code is part of the captured output, not a tool
/// failure; only infrastructure problems (bad path, wrong extension, spawn
/// failure, timeout) produce an error result.
pub struct RunScriptTool;

#[async_trait]
impl Tool for RunScriptTool {
    fn name(&self) -> &'static str {
        "run_script"
    }

    fn description(&self) -> &'static str {
        "Executes a Python file within the working directory and returns the output from the interpreter."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the Python file to execute, relative to the working directory"
                },
                "args": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional arguments to pass to the Python file"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "RunScriptTool::execute: called");
        let path = match input["path"].as_str() {
            Some(p) => p,
            None => return ToolResult::error(ToolError::InvalidArgument("path is required".to_string()).to_string()),
        };

        let args: Vec<String> = input["args"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default();

        let full_path = match ctx.validate_path(Path::new(path)) {
            Ok(p) => p,
            Err(e) => {
                debug!(%e, "RunScriptTool::execute: path validation failed");
                return ToolResult::error(e.to_string());
            }
        };

        match tokio::fs::metadata(&full_path).await {
            Ok(m) if m.is_file() => {}
            _ => {
                return ToolResult::error(
                    ToolError::NotFound {
                        path: path.to_string(),
                    }
                    .to_string(),
                );
            }
        }

        // Checked before any process is spawned
        if !path.ends_with(SCRIPT_EXTENSION) {
            debug!(%path, "RunScriptTool::execute: wrong extension");
            return ToolResult::error(
                ToolError::WrongExtension {
                    path: path.to_string(),
                }
                .to_string(),
            );
        }

        debug!(interpreter = %ctx.interpreter, "RunScriptTool::execute: spawning script");
        let output = match tokio::time::timeout(
            ctx.script_timeout,
            tokio::process::Command::new(&ctx.interpreter)
                .arg(&full_path)
                .args(&args)
                .current_dir(&ctx.root)
                .kill_on_drop(true)
                .output(),
        )
        .await
        {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                debug!(%e, "RunScriptTool::execute: failed to launch interpreter");
                return ToolResult::error(ToolError::Launch(e).to_string());
            }
            Err(_) => {
                // kill_on_drop terminates the child when the future is dropped
                debug!("RunScriptTool::execute: script timed out");
                return ToolResult::error(
                    ToolError::Timeout {
                        timeout_ms: ctx.script_timeout.as_millis() as u64,
                    }
                    .to_string(),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(stdout_len = %stdout.len(), stderr_len = %stderr.len(), status = ?output.status, "RunScriptTool::execute: script finished");

        let mut sections = Vec::new();
        if !stdout.is_empty() {
            sections.push(format!("STDOUT:\n{}", stdout));
        }
        if !stderr.is_empty() {
            sections.push(format!("STDERR:\n{}", stderr));
        }
        if !output.status.success() {
            sections.push(format!("Process exited with code {}", output.status.code().unwrap_or(-1)));
        }

        if sections.is_empty() {
            ToolResult::success("No output produced.")
        } else {
            ToolResult::success(sections.join("\n"))
        }
    }
}
