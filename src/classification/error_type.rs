use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::status_codes;

/// Coarse error classification attached to proxy errors for retry routing
///
/// Observability only: it never changes the per-job status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Server-side failure, safe to retry
    Retryable,

    /// Destination rate limit, retry with backoff
    Throttled,

    /// Client-side failure, retrying will not help
    Aborted,
}

impl ErrorType {
    /// Map an aggregate HTTP status onto an error type
    pub fn from_status(status: u16) -> Self {
        match status {
            500..=599 => ErrorType::Retryable,
            status_codes::TOO_MANY_REQUESTS => ErrorType::Throttled,
            _ => ErrorType::Aborted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Retryable => "retryable",
            ErrorType::Throttled => "throttled",
            ErrorType::Aborted => "aborted",
        }
    }

    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorType::Aborted)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
