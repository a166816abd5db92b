//! # Reconciliation Constants
//!
//! Fixed strings, status codes and tuning defaults shared by the strategies,
//! the classifier and the reconciler. Message strings are part of the
//! outbound contract and must stay stable.

/// Default number of items classified per batch slice
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// `error` value recorded for delivered jobs
pub const SUCCESS_ERROR_MESSAGE: &str = "success";

/// Fallback when a destination gives no usable error detail
pub const UNKNOWN_ERROR_FORMAT: &str = "unknown error format";

/// HTTP status codes used for per-job verdicts
pub mod status_codes {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const TOO_MANY_REQUESTS: u16 = 429;
}

/// Tag keys attached to proxy errors
pub mod tag_names {
    pub const ERROR_TYPE: &str = "errorType";
}

/// Iterable destination constants
pub mod iterable {
    pub const DESTINATION_ID: &str = "ITERABLE";

    pub const SUCCESS_MESSAGE: &str = "[ITERABLE Response Handler] - Request Processed Successfully";

    pub const ERROR_MESSAGE_PREFIX: &str =
        "ITERABLE: Error transformer proxy during ITERABLE response transformation.";

    /// Bulk endpoints whose responses report per-item failures
    pub const BULK_ENDPOINT_SUFFIXES: &[&str] = &["/api/events/trackBulk", "/api/users/bulkUpdate"];
}
