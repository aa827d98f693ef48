//! ToolContext - execution context and path sandbox for tools

use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::config::AgentConfig;

use super::ToolError;

/// Execution context for tools - scoped to one agent run
///
/// Every tool operation that touches the filesystem resolves its path
/// through [`ToolContext::validate_path`]. The working root is fixed for
/// the lifetime of the run; there is no way to widen it afterwards.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Working root - all file ops constrained here
    pub root: PathBuf,

    /// Character budget for read_file output
    pub read_limit: usize,

    /// Wall-clock budget for run_script subprocesses
    pub script_timeout: Duration,

    /// Interpreter used by run_script
    pub interpreter: String,
}

impl ToolContext {
    /// Create a context with default limits (10k chars, 30s, python3)
    pub fn new(root: PathBuf) -> Self {
        Self::from_config(root, &AgentConfig::default())
    }

    /// Create a context with limits taken from configuration
    pub fn from_config(root: PathBuf, config: &AgentConfig) -> Self {
        debug!(?root, "ToolContext::from_config: called");
        Self {
            root,
            read_limit: config.read_limit_chars,
            script_timeout: Duration::from_millis(config.script_timeout_ms),
            interpreter: config.interpreter.clone(),
        }
    }

    /// Resolve a model-supplied path and enforce working-root containment
    ///
    /// Joins the candidate onto the root, resolves `.`/`..`/symlinks, and
    /// requires the result to be the root itself or a segment-wise
    /// descendant of it. Containment is checked with [`Path::starts_with`],
    /// which compares whole components, so `/work` never matches
    /// `/workshop`. Paths that do not exist yet (write targets) are
    /// resolved through their nearest existing ancestor.
    pub fn validate_path(&self, path: &Path) -> Result<PathBuf, ToolError> {
        debug!(?path, "ToolContext::validate_path: called");
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let normalized = lexical_normalize(&joined);
        let canonical = canonicalize_allow_missing(&normalized);
        let root = self.root.canonicalize().unwrap_or_else(|_| self.root.clone());

        if canonical.starts_with(&root) {
            debug!(?canonical, "ToolContext::validate_path: path is within root");
            Ok(canonical)
        } else {
            debug!(?canonical, "ToolContext::validate_path: sandbox violation");
            Err(ToolError::OutsideRoot {
                path: path.display().to_string(),
            })
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem
///
/// `..` at the top of the path pops nothing and the result simply escapes
/// the root, which the containment check then rejects.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Canonicalize a path, resolving as much of it as exists
///
/// The nearest existing ancestor is canonicalized (resolving symlinks) and
/// the non-existent remainder is re-joined onto it unchanged.
fn canonicalize_allow_missing(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let mut existing = path.to_path_buf();
    let mut tail: Vec<std::ffi::OsString> = Vec::new();

    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent.to_path_buf();
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize().unwrap_or(existing);
    for name in tail.iter().rev() {
        resolved.push(name);
    }
    resolved
}
