//! Iterable response strategies.
//!
//! Bulk track and bulk user-update calls report rejected identifiers per item
//! and use [`TrackIdentifyStrategy`]; every other endpoint only has an
//! aggregate verdict and uses [`GenericStrategy`]. Both fail the same way.

pub mod generic;
pub mod track_identify;

pub use generic::GenericStrategy;
pub use track_identify::TrackIdentifyStrategy;

use std::collections::HashMap;

use crate::classification::{ErrorType, IterableErrorResponse};
use crate::constants::{iterable, tag_names, UNKNOWN_ERROR_FORMAT};
use crate::error::ProxyError;
use crate::models::{DeliveryJobState, ResponseParams};

/// Hard-failure path shared by all Iterable strategies
///
/// No per-item detail exists when the whole call failed, so every job gets
/// the aggregate status and the same extracted message.
fn proxy_error(params: &ResponseParams) -> ProxyError {
    let destination_response = &params.destination_response;
    let status = destination_response.status;

    let error_message = IterableErrorResponse::parse(&destination_response.response)
        .error_detail()
        .unwrap_or_else(|| UNKNOWN_ERROR_FORMAT.to_string());

    let per_job_results: Vec<DeliveryJobState> = params
        .rudder_job_metadata
        .iter()
        .map(|metadata| DeliveryJobState::failure(status, metadata.clone(), error_message.clone()))
        .collect();

    let error_type = ErrorType::from_status(status);

    tracing::warn!(
        destination = iterable::DESTINATION_ID,
        status = status,
        error_type = %error_type,
        jobs = per_job_results.len(),
        error = %error_message,
        "Destination exchange failed; marking every job in the batch"
    );

    ProxyError {
        message: format!("{} {error_message}", iterable::ERROR_MESSAGE_PREFIX),
        status,
        tags: HashMap::from([(
            tag_names::ERROR_TYPE.to_string(),
            error_type.as_str().to_string(),
        )]),
        destination_response: destination_response.clone(),
        context: String::new(),
        per_job_results,
    }
}
