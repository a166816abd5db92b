use proptest::prelude::*;

/// Strategy for batch sizes seen in production (including one-item batches)
pub fn batch_len_strategy() -> impl Strategy<Value = usize> {
    0usize..=160
}

/// Strategy for a batch length plus a rejection mask over its items
pub fn rejection_mask_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=160)
}

/// Strategy for chunk sizes handed to the batch iterator
pub fn chunk_size_strategy() -> impl Strategy<Value = usize> {
    1usize..=64
}

/// Strategy for non-2xx HTTP statuses
pub fn failure_status_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![300u16..=399, 400u16..=499, 500u16..=599]
}

/// Strategy for error bodies in the shapes destinations send
pub fn error_body_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        "[a-zA-Z ]{1,40}".prop_map(|m| serde_json::json!({ "message": m })),
        "[a-zA-Z ]{1,40}".prop_map(|m| serde_json::json!({ "msg": m, "code": "GenericError" })),
        Just(serde_json::json!({"params": {"email": "invalid"}})),
        Just(serde_json::json!({})),
        Just(serde_json::json!("Service Unavailable")),
    ]
}
