//! CLI definition

use clap::Parser;
use std::path::PathBuf;

/// Codebot - sandboxed LLM coding agent
#[derive(Debug, Parser)]
#[command(
    name = "codebot",
    about = "Sandboxed LLM coding agent for the command line",
    version,
    after_help = "Logs are written to: ~/.local/share/codebot/logs/codebot.log"
)]
pub struct Cli {
    /// Task prompt for the agent (multiple words are joined)
    #[arg(required = true, value_name = "PROMPT")]
    pub prompt: Vec<String>,

    /// Print the prompt and per-round token counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Working directory the agent is allowed to touch
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    /// The prompt as a single string
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
