//! Non-bulk Iterable endpoints: the response has no per-item detail, so a
//! successful call delivers every job.

use crate::constants::iterable;
use crate::error::ProxyError;
use crate::models::{DeliveryJobState, DeliveryResult, ResponseParams};
use crate::strategy::ResponseStrategy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericStrategy;

impl ResponseStrategy for GenericStrategy {
    fn destination(&self) -> &'static str {
        iterable::DESTINATION_ID
    }

    fn handle_success(&self, params: &ResponseParams) -> DeliveryResult {
        let response = params
            .rudder_job_metadata
            .iter()
            .cloned()
            .map(DeliveryJobState::success)
            .collect();

        DeliveryResult {
            status: params.destination_response.status,
            message: iterable::SUCCESS_MESSAGE.to_string(),
            destination_response: params.destination_response.clone(),
            response,
        }
    }

    fn handle_error(&self, params: &ResponseParams) -> ProxyError {
        super::proxy_error(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DestinationResponse, JobMetadata};
    use serde_json::json;

    #[test]
    fn test_every_job_delivered_without_classification() {
        // Rejection lists are ignored on non-bulk endpoints
        let params = ResponseParams::new(
            DestinationResponse::new(200, json!({"msg": "ok", "invalidEmails": ["x"]})),
            vec![JobMetadata::with_job_id(5), JobMetadata::with_job_id(6)],
            None,
        );

        let result = GenericStrategy.handle_success(&params);

        assert_eq!(result.response.len(), 2);
        assert!(result.response.iter().all(DeliveryJobState::is_delivered));
        assert_eq!(result.response[1].metadata.job_id(), Some(&json!(6)));
    }

    #[test]
    fn test_error_path_matches_bulk_strategy() {
        let params = ResponseParams::new(
            DestinationResponse::new(401, json!({"params": {"apiKey": "invalid"}})),
            vec![JobMetadata::with_job_id(1)],
            None,
        );

        let error = GenericStrategy.handle_response(&params).unwrap_err();
        assert_eq!(error.per_job_results[0].error, r#"{"apiKey":"invalid"}"#);
        assert_eq!(error.tag("errorType"), Some("aborted"));
    }
}
