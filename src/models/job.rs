use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{status_codes, SUCCESS_ERROR_MESSAGE};

/// Caller-supplied metadata for one outbound item
///
/// Opaque to this crate: the JSON value is held as received and serialized
/// back out unchanged, whatever type `jobId` (or anything else) carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobMetadata(Value);

impl JobMetadata {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn with_job_id(job_id: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert("jobId".to_string(), job_id.into());
        Self(Value::Object(fields))
    }

    /// The `jobId` field as received, for logging and correlation
    pub fn job_id(&self) -> Option<&Value> {
        self.0.get("jobId")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for JobMetadata {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Normalized per-job delivery verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryJobState {
    pub status_code: u16,
    pub metadata: JobMetadata,
    pub error: String,
}

impl DeliveryJobState {
    /// Delivered: `200` with the `"success"` marker
    pub fn success(metadata: JobMetadata) -> Self {
        Self {
            status_code: status_codes::OK,
            metadata,
            error: SUCCESS_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn failure(status_code: u16, metadata: JobMetadata, error: impl Into<String>) -> Self {
        Self {
            status_code,
            metadata,
            error: error.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status_code == status_codes::OK
    }
}
