//! src/validators/rules.rs

use crate::validators::{Rule, RuleParams};
use validator::{ValidateEmail, ValidateLength};

/// Value is present: not empty once surrounding whitespace is trimmed.
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Rule for Required {
    fn code(&self) -> &'static str {
        "required"
    }

    fn is_valid(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Value is a syntactically valid email. Empty values pass.
#[derive(Debug, Clone, Copy)]
pub struct Email;

impl Rule for Email {
    fn code(&self) -> &'static str {
        "email"
    }

    fn is_valid(&self, value: &str) -> bool {
        value.is_empty() || value.to_owned().validate_email()
    }
}

/// Value has at least `min` characters. Empty values pass.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    pub min: u64,
}

impl Rule for MinLength {
    fn code(&self) -> &'static str {
        "min_length"
    }

    fn params(&self) -> RuleParams {
        RuleParams::from([("min", self.min.into())])
    }

    fn is_valid(&self, value: &str) -> bool {
        value.is_empty() || value.to_owned().validate_length(Some(self.min), None, None)
    }
}
