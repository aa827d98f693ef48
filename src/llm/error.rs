//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// These are the only failures that surface out of the agent loop; tool
/// failures are folded into the transcript instead.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this error is worth retrying with backoff
    ///
    /// Rate limits are not retried here; they carry their own retry-after
    /// delay and surface to the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => false,
            LlmError::ApiError { status, .. } => matches!(*status, 408 | 500 | 502 | 503 | 504 | 529),
            LlmError::Network(_) => true,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> LlmError {
        LlmError::ApiError {
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_transient_statuses_are_retryable() {
        for status in [408, 500, 502, 503, 504, 529] {
            assert!(api_error(status).is_retryable(), "{status} should be retryable");
        }
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        for status in [400, 401, 403, 404, 422] {
            assert!(!api_error(status).is_retryable(), "{status} should not be retryable");
        }
    }

    #[test]
    fn test_rate_limit_surfaces_instead_of_retrying() {
        let err = LlmError::RateLimited {
            retry_after: Duration::from_secs(60),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_malformed_response_is_not_retryable() {
        assert!(!LlmError::InvalidResponse("Bad JSON".to_string()).is_retryable());
    }
}
