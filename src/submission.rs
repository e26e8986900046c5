use crate::api_client::ApiError;
use crate::lead_client::LeadClient;
use crate::models::{Lead, SubmissionState, SuccessEnvelope};
use serde_json::Value;
use std::time::Duration;

/// How long a form shows the success state before resetting.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Fallback shown when a failure carries no message of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Submission state machine driving a lead form.
///
/// States: idle, loading, succeeded, failed. `submit` clears any prior
/// outcome and enters loading; resolution lands in succeeded or failed and
/// the underlying result is returned to the caller for local handling.
/// `reset` returns to idle from any state.
pub struct LeadSubmission {
    client: LeadClient,
    state: SubmissionState,
}

impl LeadSubmission {
    pub fn new(client: LeadClient) -> Self {
        Self {
            client,
            state: SubmissionState::default(),
        }
    }

    /// Current `{loading, error, success}` snapshot.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Submits a lead, tracking the async round trip in the state.
    pub async fn submit(&mut self, lead: &Lead) -> Result<SuccessEnvelope<Value>, ApiError> {
        self.state = SubmissionState {
            loading: true,
            error: None,
            success: false,
        };

        match self.client.create_lead(lead).await {
            Ok(response) => {
                self.state = SubmissionState {
                    loading: false,
                    error: None,
                    success: true,
                };
                Ok(response)
            }
            Err(error) => {
                let message = if error.message.is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    error.message.clone()
                };
                self.state = SubmissionState {
                    loading: false,
                    error: Some(message),
                    success: false,
                };
                Err(error)
            }
        }
    }

    /// Returns to idle: `{loading: false, error: None, success: false}`.
    /// Idempotent from any state.
    pub fn reset(&mut self) {
        self.state = SubmissionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiClient;
    use crate::config::ClientConfig;

    fn submission() -> LeadSubmission {
        let config = ClientConfig::new("http://127.0.0.1:1", Duration::from_millis(200));
        let api = ApiClient::new(&config).expect("client builds");
        LeadSubmission::new(LeadClient::new(api))
    }

    #[test]
    fn starts_idle() {
        let s = submission();
        assert_eq!(*s.state(), SubmissionState::default());
    }

    #[tokio::test]
    async fn validation_failure_sets_error_state_and_rethrows() {
        let mut s = submission();
        let lead = Lead {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        };

        let err = s.submit(&lead).await.unwrap_err();
        assert_eq!(err.status_code, 400);
        assert!(!s.state().loading);
        assert!(!s.state().success);
        assert_eq!(
            s.state().error.as_deref(),
            Some("Name is required, Email is required, Phone is required")
        );
    }

    #[tokio::test]
    async fn reset_is_idempotent_from_failed_state() {
        let mut s = submission();
        let lead = Lead {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        let _ = s.submit(&lead).await;

        s.reset();
        assert_eq!(*s.state(), SubmissionState::default());
        s.reset();
        assert_eq!(*s.state(), SubmissionState::default());
    }
}
