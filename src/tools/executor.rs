//! ToolExecutor - registry and failure boundary for tool execution

use tracing::debug;

use crate::llm::{ToolCall, ToolDefinition};

use super::builtin::{ListDirectoryTool, ReadFileTool, RunScriptTool, WriteFileTool};
use super::{Tool, ToolContext, ToolError, ToolResult};

/// Registry of tools plus the execution failure boundary
///
/// Tools are kept in registration order so the schema list advertised to
/// the model is deterministic. The set is closed after construction.
pub struct ToolExecutor {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with the four builtin tools
    pub fn standard() -> Self {
        let tools: Vec<Box<dyn Tool>> = vec![
            Box::new(ListDirectoryTool),
            Box::new(ReadFileTool),
            Box::new(WriteFileTool),
            Box::new(RunScriptTool),
        ];

        Self { tools }
    }

    /// Get tool definitions for the LLM, in registration order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Execute a tool call
    ///
    /// An unknown tool name is returned as an error result rather than a
    /// hard failure so it still lands in the transcript and the model can
    /// self-correct.
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        debug!(name = %tool_call.name, "ToolExecutor::execute: called");
        match self.tools.iter().find(|t| t.name() == tool_call.name) {
            Some(tool) => tool.execute(tool_call.input.clone(), ctx).await,
            None => ToolResult::error(
                ToolError::UnknownTool {
                    name: tool_call.name.clone(),
                }
                .to_string(),
            ),
        }
    }

    /// Execute multiple tool calls, strictly in request order
    ///
    /// A failure in one call never skips the remaining calls; each produces
    /// its own result paired with the originating call id.
    pub async fn execute_all(&self, tool_calls: &[ToolCall], ctx: &ToolContext) -> Vec<(String, ToolResult)> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            let result = self.execute(call, ctx).await;
            results.push((call.id.clone(), result));
        }

        results
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Get tool names in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}
