use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Domain Models ============

/// A prospective contact submitted through the capture form.
///
/// Created transiently per submission and never persisted by this system.
/// Fields default to empty strings on deserialization so that validation is
/// owned by the service layer rather than the JSON extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lead {
    /// Full name of the contact.
    #[serde(default)]
    pub name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

// ============ CRM Wire Models ============

/// Payload sent to the CRM API when creating a lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmLeadRequest {
    pub properties: CrmProperties,
}

/// CRM contact properties in the schema the upstream expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmProperties {
    pub firstname: String,
    pub email: String,
    pub phone: String,
    pub lifecyclestage: String,
    pub hs_lead_status: String,
}

/// Error body shape the CRM returns on rejected requests. Both fields are
/// optional; the service falls back through `message`, then the first entry
/// of `errors`, then a generic string.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpstreamErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<UpstreamErrorDetail>,
}

/// Single entry of the CRM `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorDetail {
    pub message: Option<String>,
}

// ============ Wire Envelopes ============

/// Uniform wrapper for all successful HTTP responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T = Value> {
    pub status: String,
    pub data: T,
    pub message: String,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data,
            message: message.into(),
        }
    }
}

/// Uniform wrapper for all error HTTP responses, regardless of origin
/// (validation, upstream mapping, or unexpected failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub timestamp: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

// ============ Client-side State ============

/// Per-form submission state tracked across the async round trip.
///
/// Lifecycle: reset -> loading -> (success | error), with an explicit reset
/// back to the default after a terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}
