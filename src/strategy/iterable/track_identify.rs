//! Bulk track / bulk user-update reconciliation.
//!
//! The request carries either `events` or `users`; the response lists the
//! identifiers Iterable rejected. Each item keeps its position, so item `i`
//! maps to job metadata `i`.

use crate::batching::{for_each_in_batches, BatchOptions};
use crate::classification::BatchErrorChecker;
use crate::constants::{iterable, status_codes};
use crate::error::ProxyError;
use crate::models::{DeliveryJobState, DeliveryResult, ResponseParams};
use crate::strategy::ResponseStrategy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackIdentifyStrategy {
    batch_options: BatchOptions,
}

impl TrackIdentifyStrategy {
    pub fn new(batch_options: BatchOptions) -> Self {
        Self { batch_options }
    }

    pub fn batch_options(&self) -> BatchOptions {
        self.batch_options
    }
}

impl ResponseStrategy for TrackIdentifyStrategy {
    fn destination(&self) -> &'static str {
        iterable::DESTINATION_ID
    }

    fn handle_success(&self, params: &ResponseParams) -> DeliveryResult {
        let destination_response = &params.destination_response;
        let metadata = &params.rudder_job_metadata;
        let items = params.request_items();

        let mut response = Vec::with_capacity(items.len());

        if !items.is_empty() {
            if items.len() != metadata.len() {
                tracing::warn!(
                    items = items.len(),
                    metadata = metadata.len(),
                    "Request items and job metadata are not aligned; unmatched items are skipped"
                );
            }

            let checker = BatchErrorChecker::new(destination_response);

            for_each_in_batches(
                items,
                |item, index| {
                    // Items past the end of the metadata have no job to report on
                    let Some(job_metadata) = metadata.get(index).cloned() else {
                        return;
                    };
                    let verdict = checker.check(item);

                    let state = if verdict.is_abortable {
                        DeliveryJobState::failure(
                            status_codes::BAD_REQUEST,
                            job_metadata,
                            verdict.error_msg,
                        )
                    } else {
                        DeliveryJobState::success(job_metadata)
                    };
                    response.push(state);
                },
                self.batch_options,
            );
        }

        let result = DeliveryResult {
            status: destination_response.status,
            message: iterable::SUCCESS_MESSAGE.to_string(),
            destination_response: destination_response.clone(),
            response,
        };

        tracing::debug!(
            destination = iterable::DESTINATION_ID,
            status = result.status,
            delivered = result.delivered_count(),
            aborted = result.aborted_count(),
            "Reconciled bulk response"
        );

        result
    }

    fn handle_error(&self, params: &ResponseParams) -> ProxyError {
        super::proxy_error(params)
    }
}
