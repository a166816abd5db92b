//! Fixture builders for bulk exchanges.

use delivery_reconciler::models::{
    DestinationRequest, DestinationResponse, JobMetadata, ResponseParams,
};
use serde_json::{json, Value};

pub const BULK_TRACK_ENDPOINT: &str = "https://api.iterable.com/api/events/trackBulk";
pub const BULK_USERS_ENDPOINT: &str = "https://api.iterable.com/api/users/bulkUpdate";
pub const TRACK_ENDPOINT: &str = "https://api.iterable.com/api/events/track";

pub fn job_metadata(count: usize) -> Vec<JobMetadata> {
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "jobId": i as i64 + 1,
                "attemptNum": 0,
                "userId": "",
                "sourceId": "source-1",
                "destinationId": "dest-1",
                "workspaceId": "ws-1",
                "dontBatch": false
            }))
            .expect("valid metadata fixture")
        })
        .collect()
}

pub fn email_for(index: usize) -> String {
    format!("user{index}@example.com")
}

pub fn track_events(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "email": email_for(i),
                "userId": format!("user-{i}"),
                "eventName": "Product Viewed",
                "createdAt": 1_700_000_000 + i as i64,
                "dataFields": {"sku": format!("sku-{i}")}
            })
        })
        .collect()
}

/// Bulk response rejecting the emails of the given indices
pub fn bulk_response_rejecting(total: usize, rejected: &[usize]) -> Value {
    let invalid: Vec<String> = rejected.iter().map(|i| email_for(*i)).collect();
    json!({
        "successCount": total - rejected.len(),
        "failCount": rejected.len(),
        "invalidEmails": invalid,
        "invalidUserIds": [],
        "disallowedEventNames": [],
        "filteredOutFields": [],
        "createdFields": []
    })
}

pub fn bulk_track_params(count: usize, rejected: &[usize]) -> ResponseParams {
    ResponseParams::new(
        DestinationResponse::new(200, bulk_response_rejecting(count, rejected)),
        job_metadata(count),
        Some(DestinationRequest::with_events(track_events(count))),
    )
}
