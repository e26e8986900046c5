use crate::api_client::{ApiClient, ApiError};
use crate::models::{Lead, SuccessEnvelope};
use crate::validation::{is_blank, is_valid_email};
use serde_json::Value;

/// Backend endpoint for lead submissions.
pub const LEADS_ENDPOINT: &str = "/leads";

/// Client-side lead submission service.
///
/// Runs a local pre-check before any network call, then delegates to the
/// injected [`ApiClient`]. The pre-check is deliberately independent of the
/// backend validation; both layers share the same email pattern.
pub struct LeadClient {
    api: ApiClient,
}

impl LeadClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validates lead data before sending it to the API.
    ///
    /// Accumulates every violation and fails once with all of them joined
    /// by ", " so the user sees the complete list in one pass.
    pub fn validate(lead: &Lead) -> Result<(), ApiError> {
        let mut errors: Vec<&str> = Vec::new();

        if is_blank(&lead.name) {
            errors.push("Name is required");
        }

        if is_blank(&lead.email) {
            errors.push("Email is required");
        } else if !is_valid_email(&lead.email) {
            errors.push("Email format is invalid");
        }

        if is_blank(&lead.phone) {
            errors.push("Phone is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::new(errors.join(", "), 400, None))
        }
    }

    /// Creates a new lead through the backend.
    ///
    /// # Returns
    ///
    /// * `Result<SuccessEnvelope<Value>, ApiError>` - The success envelope
    ///   from the backend, or a uniform client error.
    pub async fn create_lead(&self, lead: &Lead) -> Result<SuccessEnvelope<Value>, ApiError> {
        Self::validate(lead)?;

        self.api.post(LEADS_ENDPOINT, lead).await
    }
}
