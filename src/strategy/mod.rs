//! # Response Strategies
//!
//! A response strategy turns one completed destination exchange into job-level
//! outcomes. Each destination (and, where the destination needs it, each
//! endpoint family) has its own strategy; all of them share this contract:
//!
//! - [`ResponseStrategy::handle_success`] returns one [`DeliveryJobState`] per
//!   job, in job order. Per-item rejections are data (400 entries), never errors.
//! - [`ResponseStrategy::handle_error`] builds the [`ProxyError`] for an
//!   exchange that failed outright, still carrying one entry per job.
//! - [`ResponseStrategy::handle_response`] picks between the two by status.
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌───────────────────────┐
//! │ ResponseParams   │────▶│ ResponseStrategy │────▶│ DeliveryResult        │
//! │ (response, jobs, │     │ (per destination)│     │   or ProxyError       │
//! │  request)        │     └──────────────────┘     │ (perJobResults)       │
//! └──────────────────┘                              └───────────────────────┘
//! ```
//!
//! Strategies are selected through [`ResponseStrategyKind`], a closed set of
//! variants, rather than trait objects.
//!
//! [`DeliveryJobState`]: crate::models::DeliveryJobState

pub mod iterable;

pub use iterable::{GenericStrategy, TrackIdentifyStrategy};

use crate::error::ProxyError;
use crate::models::{DeliveryResult, ResponseParams};

/// Contract every destination response strategy implements
pub trait ResponseStrategy: Send + Sync {
    /// Identifier of the destination this strategy serves
    fn destination(&self) -> &'static str;

    /// Reconcile a successful exchange into per-job verdicts
    fn handle_success(&self, params: &ResponseParams) -> DeliveryResult;

    /// Build the structured failure for an exchange that failed as a whole
    fn handle_error(&self, params: &ResponseParams) -> ProxyError;

    /// 2xx responses go through `handle_success`, everything else fails
    fn handle_response(&self, params: &ResponseParams) -> Result<DeliveryResult, ProxyError> {
        if params.destination_response.is_success() {
            Ok(self.handle_success(params))
        } else {
            Err(self.handle_error(params))
        }
    }
}

/// Closed set of available strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStrategyKind {
    IterableTrackIdentify(TrackIdentifyStrategy),
    IterableGeneric(GenericStrategy),
}

impl ResponseStrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResponseStrategyKind::IterableTrackIdentify(_) => "iterable_track_identify",
            ResponseStrategyKind::IterableGeneric(_) => "iterable_generic",
        }
    }

    fn as_strategy(&self) -> &dyn ResponseStrategy {
        match self {
            ResponseStrategyKind::IterableTrackIdentify(strategy) => strategy,
            ResponseStrategyKind::IterableGeneric(strategy) => strategy,
        }
    }
}

impl ResponseStrategy for ResponseStrategyKind {
    fn destination(&self) -> &'static str {
        self.as_strategy().destination()
    }

    fn handle_success(&self, params: &ResponseParams) -> DeliveryResult {
        self.as_strategy().handle_success(params)
    }

    fn handle_error(&self, params: &ResponseParams) -> ProxyError {
        self.as_strategy().handle_error(params)
    }
}
