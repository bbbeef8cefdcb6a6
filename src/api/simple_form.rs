//! src/api/simple_form.rs

use crate::api::{delay, ApiError};
use crate::domain::{FieldErrors, SubmissionPayload, EMAIL};
use serde_json::Value;
use std::time::Duration;
use tracing::{field::display, Span};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);
pub const TAKEN_NICKNAME: &str = "nickname";
pub const TAKEN_EMAIL: &str = "email@example.com";
pub const EMAIL_TAKEN_MESSAGE: &str = "Такой email уже занят";
pub const UNPROCESSABLE_ENTITY: &str = "422";
pub const SUBMIT_OK: &str = "ok";

/// Stand-in for the form back-end: every call waits `latency`, then answers
/// from fixed fixtures.
#[derive(Debug, Clone)]
pub struct MockApi {
    latency: Duration,
    taken_nickname: String,
    taken_email: String,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, TAKEN_NICKNAME.into(), TAKEN_EMAIL.into())
    }
}

impl MockApi {
    pub fn new(latency: Duration, taken_nickname: String, taken_email: String) -> Self {
        Self {
            latency,
            taken_nickname,
            taken_email,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// `false` if the nickname is already taken.
    #[tracing::instrument(name = "Checking nickname for uniqueness.", skip(self))]
    pub async fn check_nickname_for_uniq_request(&self, nickname: &str) -> bool {
        tracing::info!("checking {}", nickname);
        delay(self.latency).await;
        nickname != self.taken_nickname
    }

    /// Fails with a 422 `ApiError` if the payload's email is already taken.
    #[tracing::instrument(
        name = "Submitting form.",
        skip(self, payload),
        fields(email = tracing::field::Empty)
    )]
    pub async fn submit_form_request(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<&'static str, ApiError> {
        delay(self.latency).await;

        let email = payload.get(EMAIL).and_then(Value::as_str);
        if let Some(email) = email {
            Span::current().record("email", display(email));
        }
        if email == Some(self.taken_email.as_str()) {
            tracing::warn!("Email is already taken.");
            return Err(ApiError::new(
                UNPROCESSABLE_ENTITY,
                FieldErrors::from([(EMAIL.to_owned(), vec![EMAIL_TAKEN_MESSAGE.to_owned()])]),
            ));
        }
        Ok(SUBMIT_OK)
    }
}

/// Check a nickname against the default fixtures.
pub async fn check_nickname_for_uniq_request(nickname: &str) -> bool {
    MockApi::default()
        .check_nickname_for_uniq_request(nickname)
        .await
}

/// Submit a payload against the default fixtures.
pub async fn submit_form_request(payload: &SubmissionPayload) -> Result<&'static str, ApiError> {
    MockApi::default().submit_form_request(payload).await
}
