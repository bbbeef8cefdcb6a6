//! src/domain/mod.rs

mod simple_form;

use std::collections::BTreeMap;

pub use simple_form::{SimpleForm, EMAIL, NICKNAME, PASSWORD};

/// Open mapping from field name to value, as sent to the submission endpoint.
pub type SubmissionPayload = serde_json::Map<String, serde_json::Value>;

/// Field name to ordered list of human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;
