//! # Response Reconciler
//!
//! Entry point used by the delivery pipeline once a destination call has
//! completed. It resolves the response strategy for the destination and
//! endpoint, checks that job metadata lines up with the request items, and
//! hands the exchange to the strategy.
//!
//! ```rust
//! use delivery_reconciler::config::ReconcilerConfig;
//! use delivery_reconciler::models::{DestinationRequest, DestinationResponse, JobMetadata, ResponseParams};
//! use delivery_reconciler::ResponseReconciler;
//! use serde_json::json;
//!
//! let reconciler = ResponseReconciler::new(ReconcilerConfig::default());
//! let params = ResponseParams::new(
//!     DestinationResponse::new(200, json!({"successCount": 1, "failCount": 0})),
//!     vec![JobMetadata::with_job_id(1)],
//!     Some(DestinationRequest::with_events(vec![json!({"email": "a@example.com"})])),
//! );
//!
//! let result = reconciler
//!     .reconcile("ITERABLE", "https://api.iterable.com/api/events/trackBulk", &params)
//!     .unwrap();
//! assert_eq!(result.response[0].status_code, 200);
//! ```

use crate::config::ReconcilerConfig;
use crate::error::{ReconcilerError, Result};
use crate::logging::log_reconcile_operation;
use crate::models::{DeliveryResult, ResponseParams};
use crate::registry::Destination;
use crate::strategy::{ResponseStrategy, ResponseStrategyKind};

/// Stateless reconciler; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct ResponseReconciler {
    config: ReconcilerConfig,
}

impl ResponseReconciler {
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Resolve the strategy for a destination identifier and endpoint
    pub fn strategy(&self, destination_id: &str, endpoint: &str) -> Result<ResponseStrategyKind> {
        let destination: Destination = destination_id.parse()?;
        Ok(destination.strategy_for(endpoint, self.config.batch_options()))
    }

    /// Reconcile one completed exchange into per-job outcomes
    ///
    /// Non-2xx responses come back as [`ReconcilerError::Proxy`] carrying one
    /// failure entry per job.
    pub fn reconcile(
        &self,
        destination_id: &str,
        endpoint: &str,
        params: &ResponseParams,
    ) -> Result<DeliveryResult> {
        let strategy = self.strategy(destination_id, endpoint)?;
        Self::check_alignment(&strategy, params)?;

        let status = params.destination_response.status;
        let jobs = params.rudder_job_metadata.len();

        match strategy.handle_response(params) {
            Ok(result) => {
                let details = format!(
                    "strategy={} delivered={} aborted={}",
                    strategy.name(),
                    result.delivered_count(),
                    result.aborted_count()
                );
                log_reconcile_operation(
                    "reconcile",
                    strategy.destination(),
                    status,
                    jobs,
                    Some(&details),
                );
                Ok(result)
            }
            Err(proxy_error) => {
                tracing::warn!(
                    destination = strategy.destination(),
                    strategy = strategy.name(),
                    status = proxy_error.status,
                    jobs = proxy_error.per_job_results.len(),
                    "Destination exchange failed: {}",
                    proxy_error.message
                );
                Err(proxy_error.into())
            }
        }
    }

    /// Bulk strategies map item `i` to metadata `i`, so both lists must match
    fn check_alignment(strategy: &ResponseStrategyKind, params: &ResponseParams) -> Result<()> {
        if !matches!(strategy, ResponseStrategyKind::IterableTrackIdentify(_))
            || !params.destination_response.is_success()
        {
            return Ok(());
        }

        let items = params.request_items().len();
        let metadata = params.rudder_job_metadata.len();
        if items != metadata {
            tracing::error!(
                items = items,
                metadata = metadata,
                "Refusing to reconcile misaligned batch"
            );
            return Err(ReconcilerError::MetadataMismatch { items, metadata });
        }

        Ok(())
    }
}
