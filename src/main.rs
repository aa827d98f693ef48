//! Codebot CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use codebot::agent::{AgentEngine, AgentOutcome};
use codebot::cli::Cli;
use codebot::config::Config;
use codebot::llm;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codebot")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to file, not stdout - stdout carries the model's answer
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("codebot.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    // Unreadable working root is a hard startup failure
    let root = cli
        .dir
        .canonicalize()
        .wrap_err_with(|| format!("Working directory not accessible: {}", cli.dir.display()))?;

    info!(
        "Codebot starting: model={}, root={}",
        config.llm.model,
        root.display()
    );

    let client = llm::create_client(&config.llm)?;
    let engine = AgentEngine::new(config.agent.clone(), client, root, cli.verbose);

    let prompt = cli.prompt_text();
    if cli.verbose {
        println!("User prompt: {}\n", prompt);
    }

    match engine.run(&prompt).await? {
        AgentOutcome::Done {
            text,
            rounds,
            input_tokens,
            output_tokens,
        } => {
            info!(rounds, input_tokens, output_tokens, "Agent finished");
            println!("{}", text);
        }
        AgentOutcome::BudgetExhausted {
            rounds,
            input_tokens,
            output_tokens,
        } => {
            // Distinct outcome, still normal termination
            info!(rounds, input_tokens, output_tokens, "Round budget exhausted");
            println!("Reached the maximum of {} rounds without a final answer.", rounds);
        }
    }

    Ok(())
}
