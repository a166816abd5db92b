//! Error types for the reconciliation core.
//!
//! Two families live here:
//! - [`ProxyError`]: the structured hard-failure value a response strategy
//!   produces when a destination exchange failed outright. It still carries
//!   one [`DeliveryJobState`] per job so callers never lose job granularity.
//! - [`ReconcilerError`]: crate-level errors from the reconciler entry point.

use crate::config::ConfigurationError;
use crate::models::{DeliveryJobState, DestinationResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Structured failure for a destination exchange that failed as a whole.
///
/// The fields are public so the surrounding pipeline can route and log on
/// `status` and `tags` without parsing `message`.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ProxyError {
    /// Composed message naming the destination and the extracted error
    pub message: String,

    /// Aggregate HTTP status of the exchange
    pub status: u16,

    /// Observability tags, e.g. `errorType`
    pub tags: HashMap<String, String>,

    /// Raw destination response, untouched
    pub destination_response: DestinationResponse,

    /// Free-form context; empty for strategy-generated errors
    pub context: String,

    /// One synthesized failure per job, in job order
    pub per_job_results: Vec<DeliveryJobState>,
}

impl ProxyError {
    /// Look up a tag value
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconcilerError {
    #[error(transparent)]
    Proxy(#[from] Box<ProxyError>),
    #[error("Unsupported destination: {0}")]
    UnsupportedDestination(String),
    #[error("Job metadata mismatch: {items} request items but {metadata} metadata entries")]
    MetadataMismatch { items: usize, metadata: usize },
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<ProxyError> for ReconcilerError {
    fn from(error: ProxyError) -> Self {
        ReconcilerError::Proxy(Box::new(error))
    }
}

impl From<ConfigurationError> for ReconcilerError {
    fn from(error: ConfigurationError) -> Self {
        ReconcilerError::ConfigurationError(error.to_string())
    }
}

impl ReconcilerError {
    /// The proxy error behind this failure, if the exchange itself failed
    pub fn as_proxy_error(&self) -> Option<&ProxyError> {
        match self {
            ReconcilerError::Proxy(proxy) => Some(proxy),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconcilerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobMetadata;
    use serde_json::json;

    fn sample_proxy_error() -> ProxyError {
        ProxyError {
            message: "ITERABLE: boom".to_string(),
            status: 429,
            tags: HashMap::from([("errorType".to_string(), "throttled".to_string())]),
            destination_response: DestinationResponse::new(429, json!({"message": "boom"})),
            context: String::new(),
            per_job_results: vec![DeliveryJobState::failure(
                429,
                JobMetadata::with_job_id(1),
                "boom",
            )],
        }
    }

    #[test]
    fn test_proxy_error_display_uses_message() {
        let error = sample_proxy_error();
        assert_eq!(error.to_string(), "ITERABLE: boom");
        assert_eq!(error.tag("errorType"), Some("throttled"));
        assert_eq!(error.tag("missing"), None);
    }

    #[test]
    fn test_proxy_error_serializes_camel_case() {
        let value = serde_json::to_value(sample_proxy_error()).unwrap();
        assert!(value.get("perJobResults").is_some());
        assert!(value.get("destinationResponse").is_some());
        assert_eq!(value["perJobResults"][0]["statusCode"], json!(429));
    }

    #[test]
    fn test_reconciler_error_wraps_proxy_error() {
        let error: ReconcilerError = sample_proxy_error().into();
        assert_eq!(error.to_string(), "ITERABLE: boom");
        assert_eq!(error.as_proxy_error().map(|e| e.status), Some(429));

        let mismatch = ReconcilerError::MetadataMismatch {
            items: 3,
            metadata: 2,
        };
        assert!(mismatch.as_proxy_error().is_none());
    }
}
