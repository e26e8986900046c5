use crate::config::ServerConfig;
use crate::errors::AppError;
use crate::models::{CrmLeadRequest, CrmProperties, Lead, UpstreamErrorBody};
use crate::validation::{is_blank, is_valid_email};
use serde_json::Value;
use std::time::Duration;

/// Validation failure message when any required field is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email and phone are required";
/// Validation failure message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
/// Conflict message when the upstream reports a duplicate lead.
pub const LEAD_CONFLICT_MESSAGE: &str = "Lead already exists in the system";
/// Fallback when an upstream 400 carries no usable message.
pub const CRM_BAD_REQUEST_FALLBACK: &str = "Invalid lead data";

/// Service for creating leads in the external CRM.
///
/// Validates the submission, transforms it into the CRM contact schema and
/// posts it upstream with bearer authentication. Upstream 409/400 statuses
/// are mapped to domain errors; everything else passes through unmapped.
#[derive(Clone)]
pub struct LeadService {
    client: reqwest::Client,
    api_url: reqwest::Url,
    api_key: String,
}

impl LeadService {
    /// Creates a new `LeadService`.
    ///
    /// Fails fast when the base URL, endpoint path or API key is missing or
    /// the joined URL does not parse. A misconfigured service must never get
    /// as far as serving requests.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        if is_blank(&config.crm_api_url)
            || is_blank(&config.crm_end_point)
            || is_blank(&config.crm_api_key)
        {
            return Err(AppError::Internal(
                "The base URL from API is not defined".to_string(),
            ));
        }

        let api_url = format!("{}{}", config.crm_api_url, config.crm_end_point);
        let api_url = reqwest::Url::parse(&api_url)
            .map_err(|e| AppError::Internal(format!("Invalid CRM URL '{}': {}", api_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create CRM client: {}", e)))?;

        Ok(Self {
            client,
            api_url,
            api_key: config.crm_api_key.clone(),
        })
    }

    /// Validates a lead before it is sent upstream.
    ///
    /// All three fields must be non-blank and the email must match the shared
    /// pattern. Kept independent from the client-side pre-check: each layer
    /// is authoritative on its own.
    pub fn validate(lead: &Lead) -> Result<(), AppError> {
        if is_blank(&lead.name) || is_blank(&lead.email) || is_blank(&lead.phone) {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        if !is_valid_email(&lead.email) {
            return Err(AppError::BadRequest(INVALID_EMAIL_MESSAGE.to_string()));
        }

        Ok(())
    }

    /// Transforms a lead into the CRM contact schema.
    fn prepare_data(lead: &Lead) -> CrmLeadRequest {
        CrmLeadRequest {
            properties: CrmProperties {
                firstname: lead.name.clone(),
                email: lead.email.clone(),
                phone: lead.phone.clone(),
                lifecyclestage: "lead".to_string(),
                hs_lead_status: "NEW".to_string(),
            },
        }
    }

    /// Creates a new lead in the CRM.
    ///
    /// # Returns
    ///
    /// * `Result<Value, AppError>` - The upstream response body on success.
    pub async fn create_lead(&self, lead: &Lead) -> Result<Value, AppError> {
        Self::validate(lead)?;

        let body = Self::prepare_data(lead);
        tracing::info!("Creating lead in CRM: {}", lead.name);

        let response = self
            .client
            .post(self.api_url.clone())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("CRM request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let data = response.json().await.map_err(|e| {
                AppError::Internal(format!("Failed to parse CRM response: {}", e))
            })?;
            tracing::info!("Lead created successfully in CRM");
            return Ok(data);
        }

        let payload: Value = response.json().await.unwrap_or(Value::Null);

        match status.as_u16() {
            409 => Err(AppError::Conflict(LEAD_CONFLICT_MESSAGE.to_string())),
            400 => Err(AppError::BadRequest(upstream_message(&payload))),
            code => {
                let message = payload
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("External API error")
                    .to_string();
                tracing::error!("CRM returned {}: {}", code, message);
                Err(AppError::Upstream {
                    status: code,
                    message,
                    details: (!payload.is_null()).then_some(payload),
                })
            }
        }
    }
}

/// Extracts the most specific message from an upstream 400 body: the
/// top-level `message`, else the first entry of `errors[].message`, else a
/// generic fallback.
fn upstream_message(payload: &Value) -> String {
    let body: UpstreamErrorBody =
        serde_json::from_value(payload.clone()).unwrap_or_default();

    body.message
        .or_else(|| body.errors.into_iter().find_map(|e| e.message))
        .unwrap_or_else(|| CRM_BAD_REQUEST_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lead() -> Lead {
        Lead {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+5511999999999".to_string(),
        }
    }

    #[test]
    fn prepare_data_builds_crm_schema() {
        let payload = LeadService::prepare_data(&lead());
        assert_eq!(payload.properties.firstname, "Ana Silva");
        assert_eq!(payload.properties.email, "ana@example.com");
        assert_eq!(payload.properties.phone, "+5511999999999");
        assert_eq!(payload.properties.lifecyclestage, "lead");
        assert_eq!(payload.properties.hs_lead_status, "NEW");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        for field in ["name", "email", "phone"] {
            let mut l = lead();
            match field {
                "name" => l.name = "   ".to_string(),
                "email" => l.email = String::new(),
                _ => l.phone = "\t".to_string(),
            }
            let err = LeadService::validate(&l).unwrap_err();
            assert_eq!(err.public_message(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn validate_rejects_bad_email() {
        let mut l = lead();
        l.email = "ana@example".to_string();
        let err = LeadService::validate(&l).unwrap_err();
        assert_eq!(err.public_message(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn upstream_message_prefers_top_level() {
        let msg = upstream_message(&json!({
            "message": "Invalid phone",
            "errors": [{"message": "other"}]
        }));
        assert_eq!(msg, "Invalid phone");
    }

    #[test]
    fn upstream_message_falls_back_to_errors_array() {
        let msg = upstream_message(&json!({
            "errors": [{"message": "Property phone is malformed"}]
        }));
        assert_eq!(msg, "Property phone is malformed");
    }

    #[test]
    fn upstream_message_generic_fallback() {
        assert_eq!(upstream_message(&json!({})), CRM_BAD_REQUEST_FALLBACK);
        assert_eq!(upstream_message(&Value::Null), CRM_BAD_REQUEST_FALLBACK);
    }
}
