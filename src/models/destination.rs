use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::job::{DeliveryJobState, JobMetadata};

/// Status code and body returned by a destination for one outbound call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub status: u16,

    /// Destination JSON body
    #[serde(default, alias = "body")]
    pub response: Value,
}

impl DestinationResponse {
    pub fn new(status: u16, response: Value) -> Self {
        Self { status, response }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Bulk payload sent to the destination; carries either events or users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "JSON", default, skip_serializing_if = "Option::is_none")]
    pub json: Option<BulkPayload>,
}

/// The exact request sent to the destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationRequest {
    #[serde(default)]
    pub body: RequestBody,
}

impl DestinationRequest {
    pub fn with_events(events: Vec<Value>) -> Self {
        Self::from_payload(BulkPayload {
            events: Some(events),
            users: None,
        })
    }

    pub fn with_users(users: Vec<Value>) -> Self {
        Self::from_payload(BulkPayload {
            events: None,
            users: Some(users),
        })
    }

    fn from_payload(payload: BulkPayload) -> Self {
        Self {
            body: RequestBody {
                json: Some(payload),
            },
        }
    }

    /// Items actually sent, in order. Events take precedence over users.
    pub fn items(&self) -> Option<&[Value]> {
        let payload = self.body.json.as_ref()?;
        payload
            .events
            .as_deref()
            .or(payload.users.as_deref())
    }
}

/// Everything a response strategy needs about one completed exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseParams {
    pub destination_response: DestinationResponse,

    /// Aligned with the request items by position
    pub rudder_job_metadata: Vec<JobMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_request: Option<DestinationRequest>,
}

impl ResponseParams {
    pub fn new(
        destination_response: DestinationResponse,
        rudder_job_metadata: Vec<JobMetadata>,
        destination_request: Option<DestinationRequest>,
    ) -> Self {
        Self {
            destination_response,
            rudder_job_metadata,
            destination_request,
        }
    }

    /// Request items, or an empty slice when no request was recorded
    pub fn request_items(&self) -> &[Value] {
        self.destination_request
            .as_ref()
            .and_then(DestinationRequest::items)
            .unwrap_or(&[])
    }
}

/// Successful reconciliation of one exchange into per-job verdicts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    pub status: u16,
    pub message: String,
    pub destination_response: DestinationResponse,
    pub response: Vec<DeliveryJobState>,
}

impl DeliveryResult {
    pub fn delivered_count(&self) -> usize {
        self.response.iter().filter(|job| job.is_delivered()).count()
    }

    pub fn aborted_count(&self) -> usize {
        self.response.len() - self.delivered_count()
    }
}
