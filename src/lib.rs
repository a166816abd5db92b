#![allow(clippy::doc_markdown)] // Allow technical terms like userId, trackBulk in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Delivery Reconciler
//!
//! Response reconciliation core for an event-delivery pipeline.
//!
//! ## Overview
//!
//! Upstream jobs are merged into a single batch per destination call. Once the
//! destination answers, this crate fans the bulk response back out into one
//! delivery verdict per original job:
//!
//! - **delivered**: `200` / `"success"`
//! - **permanent failure**: `400` with the destination's reason, for items the
//!   destination explicitly rejected
//! - **whole-call failure**: a [`ProxyError`] carrying the aggregate status, an
//!   error-type tag for retry routing, and one failure entry per job
//!
//! No job is ever dropped or reordered: the N-th job metadata entry always
//! yields the N-th verdict.
//!
//! ## Module Organization
//!
//! - [`batching`] - Chunked in-order iteration with absolute indices
//! - [`classification`] - Per-item error checking and error-type tagging
//! - [`strategy`] - Per-destination response strategies
//! - [`registry`] - Destination and endpoint based strategy lookup
//! - [`reconciler`] - Pipeline-facing entry point
//! - [`models`] - Exchange inputs and per-job outputs
//! - [`error`] - Proxy error and crate error types
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//!
//! ## Execution Model
//!
//! Everything here is synchronous and pure: a reconciliation reads its inputs,
//! allocates its outputs, and shares no state with any other call.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # Unit, integration and property tests
//! ```

pub mod batching;
pub mod classification;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod reconciler;
pub mod registry;
pub mod strategy;

pub use batching::{for_each_in_batches, try_for_each_in_batches, BatchOptions};
pub use classification::{BatchErrorChecker, ErrorType, ItemCheck};
pub use config::{ConfigLoader, ConfigurationError, ReconcilerConfig};
pub use error::{ProxyError, ReconcilerError, Result};
pub use models::{
    DeliveryJobState, DeliveryResult, DestinationRequest, DestinationResponse, JobMetadata,
    ResponseParams,
};
pub use reconciler::ResponseReconciler;
pub use registry::Destination;
pub use strategy::{GenericStrategy, ResponseStrategy, ResponseStrategyKind, TrackIdentifyStrategy};
