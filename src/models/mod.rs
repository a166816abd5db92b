//! Data carried through a reconciliation: inbound exchange, per-job verdicts,
//! and the success envelope.

pub mod destination;
pub mod job;

pub use destination::{
    BulkPayload, DeliveryResult, DestinationRequest, DestinationResponse, RequestBody,
    ResponseParams,
};
pub use job::{DeliveryJobState, JobMetadata};
