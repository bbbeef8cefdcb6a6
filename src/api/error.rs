//! src/api/error.rs

use crate::domain::FieldErrors;

/// Rejection returned by the mock api, with messages keyed by field name.
#[derive(thiserror::Error, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[error("api error {status}")]
pub struct ApiError {
    pub status: String,
    pub params: FieldErrors,
}

impl ApiError {
    pub fn new(status: impl Into<String>, params: FieldErrors) -> Self {
        Self {
            status: status.into(),
            params,
        }
    }
}
