//! Integration tests for codebot
//!
//! These tests exercise the tool registry end to end against a real
//! temporary working directory.

use codebot::llm::ToolCall;
use codebot::tools::{ToolContext, ToolExecutor};
use serde_json::json;
use tempfile::TempDir;

fn call(id: &str, name: &str, input: serde_json::Value) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        input,
    }
}

// =============================================================================
// Tool catalog
// =============================================================================

#[test]
fn test_standard_catalog_is_complete_and_ordered() {
    let executor = ToolExecutor::standard();
    let defs = executor.definitions();

    let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["list_directory", "read_file", "write_file", "run_script"]);

    for def in &defs {
        assert!(!def.description.is_empty(), "{} has no description", def.name);
        assert_eq!(def.input_schema["type"], "object");
    }
}

// =============================================================================
// File round-trips
// =============================================================================

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    let write = executor
        .execute(
            &call("c1", "write_file", json!({"path": "notes/todo.txt", "content": "ship it"})),
            &ctx,
        )
        .await;
    assert!(!write.is_error, "write failed: {}", write.content);
    assert!(write.content.contains("Successfully wrote to"));
    assert!(write.content.contains("(7 characters written)"));

    let read = executor
        .execute(&call("c2", "read_file", json!({"path": "notes/todo.txt"})), &ctx)
        .await;
    assert!(!read.is_error);
    assert_eq!(read.content, "ship it");
}

#[tokio::test]
async fn test_listing_reflects_written_files() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    std::fs::write(temp.path().join("a.txt"), "hello").expect("Failed to write fixture");
    std::fs::create_dir(temp.path().join("sub")).expect("Failed to create fixture dir");

    let listing = executor
        .execute(&call("c1", "list_directory", json!({"path": "."})), &ctx)
        .await;

    assert!(!listing.is_error);
    assert!(listing.content.contains("- a.txt: file_size=5 bytes, is_dir=false"));
    assert!(listing.content.contains("- sub: file_size=0 bytes, is_dir=true"));
}

// =============================================================================
// Sandbox containment
// =============================================================================

#[tokio::test]
async fn test_every_tool_rejects_parent_escape() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    let attempts = vec![
        call("c1", "list_directory", json!({"path": ".."})),
        call("c2", "read_file", json!({"path": "../secrets.txt"})),
        call("c3", "write_file", json!({"path": "../evil.txt", "content": "x"})),
        call("c4", "run_script", json!({"path": "../escape.py"})),
    ];

    let results = executor.execute_all(&attempts, &ctx).await;

    assert_eq!(results.len(), 4);
    for (id, result) in &results {
        assert!(result.is_error, "{id} should have been rejected");
        assert!(
            result.content.contains("outside the permitted working directory"),
            "{id} unexpected message: {}",
            result.content
        );
    }
}

#[tokio::test]
async fn test_escape_attempt_does_not_abort_the_batch() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join("ok.txt"), "fine").expect("Failed to write fixture");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    let calls = vec![
        call("c1", "read_file", json!({"path": "../../etc/passwd"})),
        call("c2", "read_file", json!({"path": "ok.txt"})),
    ];

    let results = executor.execute_all(&calls, &ctx).await;

    assert!(results[0].1.is_error);
    assert!(!results[1].1.is_error);
    assert_eq!(results[1].1.content, "fine");
}

// =============================================================================
// Script execution
// =============================================================================

#[tokio::test]
async fn test_agent_written_script_runs_with_args() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    let script = "import sys\nprint(\"args:\", \" \".join(sys.argv[1:]))\n";
    let write = executor
        .execute(
            &call("c1", "write_file", json!({"path": "echo_args.py", "content": script})),
            &ctx,
        )
        .await;
    assert!(!write.is_error);

    let run = executor
        .execute(
            &call("c2", "run_script", json!({"path": "echo_args.py", "args": ["alpha", "beta"]})),
            &ctx,
        )
        .await;

    assert!(!run.is_error, "run failed: {}", run.content);
    assert!(run.content.contains("STDOUT:"));
    assert!(run.content.contains("args: alpha beta"));
}

#[tokio::test]
async fn test_non_python_file_is_refused() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join("script.sh"), "echo hi").expect("Failed to write fixture");
    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(temp.path().to_path_buf());

    let run = executor
        .execute(&call("c1", "run_script", json!({"path": "script.sh"})), &ctx)
        .await;

    assert!(run.is_error);
    assert!(run.content.contains("is not a Python file"));
}
