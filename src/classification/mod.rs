//! # Destination Error Classification
//!
//! - [`batch_checker`]: per-item abortability for bulk responses
//! - [`error_type`]: status-driven error type tags for hard failures
//! - [`iterable_response`]: optional-field models of Iterable response bodies

pub mod batch_checker;
pub mod error_type;
pub mod iterable_response;

pub use batch_checker::{BatchErrorChecker, ItemCheck};
pub use error_type::ErrorType;
pub use iterable_response::{FailedUpdates, IterableBulkResponse, IterableErrorResponse};
