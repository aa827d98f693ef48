//! Codebot - a sandboxed LLM coding agent for the command line
//!
//! Codebot wraps a hosted LLM API in an iterative agentic loop. Each round
//! the full conversation transcript plus the tool catalog is sent to the
//! model; the model either answers in plain text (done) or requests one or
//! more tool calls, which are executed in order inside a working-directory
//! sandbox and fed back as the next turn.
//!
//! # Core Concepts
//!
//! - **Working root**: the single directory subtree the agent may touch.
//!   Every tool path is resolved against it and rejected if it escapes.
//! - **Failures are data**: tool errors become error-tagged tool results
//!   appended to the transcript so the model can self-correct. Nothing
//!   above the executor catches exceptions for flow control.
//! - **Bounded rounds**: the loop ends on a plain-text reply or after a
//!   fixed round budget, and the two outcomes are distinguishable.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Anthropic implementation
//! - [`tools`] - sandboxed tool system (list/read/write/run)
//! - [`agent`] - transcript and loop engine
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod tools;

pub use agent::{AgentEngine, AgentOutcome, Transcript};
pub use config::{AgentConfig, Config, LlmConfig};
pub use llm::{
    AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, StopReason, TokenUsage,
    ToolCall, ToolDefinition,
};
pub use tools::{Tool, ToolContext, ToolError, ToolExecutor, ToolResult};
