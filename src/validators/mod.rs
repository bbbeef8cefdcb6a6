//! src/validators/mod.rs
//!
//! Field rules backed by the `validator` crate, and wrappers that attach
//! human-readable messages to them.

pub mod localized;
mod message;
mod rules;

use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::ValidationError;

pub use message::{with_message, MessageSource, WithMessage};
pub use rules::{Email, MinLength, Required};

/// Parameters a rule was configured with, e.g. `{"min": 5}` for `min_length(5)`.
pub type RuleParams = BTreeMap<&'static str, serde_json::Value>;

/// Language of the messages attached by the wrappers.
#[derive(serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// A boolean check of a single field value.
pub trait Rule: Send + Sync {
    /// Reported as `ValidationError::code`.
    fn code(&self) -> &'static str;

    fn params(&self) -> RuleParams {
        RuleParams::new()
    }

    fn is_valid(&self, value: &str) -> bool;

    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            return Ok(());
        }
        let mut error = ValidationError::new(self.code());
        for (name, param) in self.params() {
            error.add_param(Cow::Borrowed(name), &param);
        }
        Err(error)
    }
}

/// Wraps [`Required`] with the "required field" message.
pub fn required() -> WithMessage<Required> {
    localized::required(Locale::default())
}

/// Wraps [`Email`] with the "invalid email" message.
pub fn email() -> WithMessage<Email> {
    localized::email(Locale::default())
}

/// Wraps [`MinLength`] with a message naming the configured minimum.
pub fn min_length(min: u64) -> WithMessage<MinLength> {
    localized::min_length(Locale::default(), min)
}

/// Message of a failed check, falling back to the rule code.
pub fn error_message(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
