//! AgentEngine - drives the iterate/call-model/execute-tools loop

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AgentConfig;
use crate::llm::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmClient, Message, StopReason, TokenUsage, ToolDefinition,
};
use crate::tools::{ToolContext, ToolExecutor, ToolResult};

use super::Transcript;

/// System prompt advertised alongside the tool catalog
const SYSTEM_PROMPT: &str = "You are a helpful AI coding agent.\n\n\
    When the user asks a question or makes a request, make a function call plan. \
    You can perform the following operations:\n\n\
    - List files and directories\n\
    - Read file contents\n\
    - Write or overwrite files\n\
    - Run Python files with optional arguments\n\n\
    All paths you provide should be relative to the working directory. \
    You do not need to specify the working directory in your function calls \
    as it is automatically injected for security reasons.";

/// How the agent run ended
///
/// Budget exhaustion is a distinct, observable outcome, not a silent
/// truncation; both variants are normal termination for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The model produced a final plain-text answer
    Done {
        text: String,
        rounds: u32,
        input_tokens: u64,
        output_tokens: u64,
    },
    /// The round budget ran out before a final answer arrived
    BudgetExhausted {
        rounds: u32,
        input_tokens: u64,
        output_tokens: u64,
    },
}

/// Agent loop execution engine
///
/// Owns the transcript for the duration of one run. Strictly sequential:
/// one model call at a time, tool calls executed in issue order.
pub struct AgentEngine {
    config: AgentConfig,
    llm: Arc<dyn LlmClient>,
    tools: ToolExecutor,
    ctx: ToolContext,
    verbose: bool,
}

impl AgentEngine {
    /// Create a new engine rooted at the given working directory
    pub fn new(config: AgentConfig, llm: Arc<dyn LlmClient>, root: PathBuf, verbose: bool) -> Self {
        let ctx = ToolContext::from_config(root, &config);
        Self {
            config,
            llm,
            tools: ToolExecutor::standard(),
            ctx,
            verbose,
        }
    }

    /// Run the loop until a final answer or the round budget
    ///
    /// Only LLM-collaborator failures propagate as errors; every tool
    /// failure is folded into the transcript as an error-tagged result.
    pub async fn run(&self, prompt: &str) -> eyre::Result<AgentOutcome> {
        info!(max_rounds = self.config.max_rounds, "Starting agent loop");

        let mut transcript = Transcript::new(prompt);
        let tool_defs: Vec<ToolDefinition> = self.tools.definitions();
        let mut total = TokenUsage::default();

        for round in 1..=self.config.max_rounds {
            debug!(round, turns = transcript.len(), "run: sending transcript to model");

            let request = CompletionRequest {
                system_prompt: SYSTEM_PROMPT.to_string(),
                messages: transcript.messages().to_vec(),
                tools: tool_defs.clone(),
                max_tokens: 4096,
            };

            let response = self.llm.complete(request).await?;
            total.add(&response.usage);
            self.report_usage(&response.usage);

            transcript.push(build_assistant_message(&response));

            match response.stop_reason {
                StopReason::ToolUse if !response.tool_calls.is_empty() => {
                    info!(round, calls = response.tool_calls.len(), "run: executing tool calls");
                    let results = self.tools.execute_all(&response.tool_calls, &self.ctx).await;
                    transcript.push(build_tool_result_message(&results));
                }
                StopReason::MaxTokens => {
                    warn!(round, "run: response truncated at max tokens");
                    transcript.push(Message::user(
                        "Continue from where you left off. Your previous response was truncated.",
                    ));
                }
                _ => {
                    info!(round, "run: model finished");
                    return Ok(AgentOutcome::Done {
                        text: response.content.unwrap_or_default(),
                        rounds: round,
                        input_tokens: total.input_tokens,
                        output_tokens: total.output_tokens,
                    });
                }
            }
        }

        warn!(max_rounds = self.config.max_rounds, "run: round budget exhausted");
        Ok(AgentOutcome::BudgetExhausted {
            rounds: self.config.max_rounds,
            input_tokens: total.input_tokens,
            output_tokens: total.output_tokens,
        })
    }

    /// Print per-round token counts when verbosity is requested
    fn report_usage(&self, usage: &TokenUsage) {
        debug!(input = usage.input_tokens, output = usage.output_tokens, "report_usage: round usage");
        if self.verbose {
            println!("Prompt tokens: {}", usage.input_tokens);
            println!("Response tokens: {}", usage.output_tokens);
        }
    }
}

/// Build the assistant turn recording the model's text and tool requests
fn build_assistant_message(response: &CompletionResponse) -> Message {
    let mut blocks = Vec::new();

    if let Some(text) = &response.content {
        blocks.push(ContentBlock::text(text));
    }

    for call in &response.tool_calls {
        blocks.push(ContentBlock::ToolUse {
            id: call.id.clone(),
            name: call.name.clone(),
            input: call.input.clone(),
        });
    }

    Message::assistant_blocks(blocks)
}

/// Build the user turn carrying tool results, in execution order
fn build_tool_result_message(results: &[(String, ToolResult)]) -> Message {
    let blocks: Vec<ContentBlock> = results
        .iter()
        .map(|(id, result)| ContentBlock::tool_result(id, &result.content, result.is_error))
        .collect();

    Message::user_blocks(blocks)
}
