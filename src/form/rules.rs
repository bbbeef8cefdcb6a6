//! src/form/rules.rs

use crate::configuration::ValidationSettings;
use crate::domain::{FieldErrors, SimpleForm, EMAIL, NICKNAME, PASSWORD};
use crate::validators::{error_message, localized, Locale, Rule};

pub const DEFAULT_NICKNAME_MIN_LENGTH: u64 = 3;
pub const DEFAULT_PASSWORD_MIN_LENGTH: u64 = 8;

/// Rules to check per form field, in the order they are reported.
pub struct FormRules {
    fields: Vec<(&'static str, Vec<Box<dyn Rule>>)>,
}

impl Default for FormRules {
    fn default() -> Self {
        Self::new(
            Locale::default(),
            DEFAULT_NICKNAME_MIN_LENGTH,
            DEFAULT_PASSWORD_MIN_LENGTH,
        )
    }
}

impl FormRules {
    pub fn new(locale: Locale, nickname_min_length: u64, password_min_length: u64) -> Self {
        Self {
            fields: vec![
                (
                    NICKNAME,
                    vec![
                        Box::new(localized::required(locale)) as Box<dyn Rule>,
                        Box::new(localized::min_length(locale, nickname_min_length)),
                    ],
                ),
                (
                    EMAIL,
                    vec![
                        Box::new(localized::required(locale)) as Box<dyn Rule>,
                        Box::new(localized::email(locale)),
                    ],
                ),
                (
                    PASSWORD,
                    vec![
                        Box::new(localized::required(locale)) as Box<dyn Rule>,
                        Box::new(localized::min_length(locale, password_min_length)),
                    ],
                ),
            ],
        }
    }

    pub fn from_settings(settings: &ValidationSettings) -> Self {
        Self::new(
            settings.locale,
            settings.nickname_min_length,
            settings.password_min_length,
        )
    }

    /// Collect the messages of every failing rule, keyed by field name.
    pub fn validate(&self, form: &SimpleForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (field, rules) in &self.fields {
            let value = form.field(field).unwrap_or_default();
            let messages: Vec<String> = rules
                .iter()
                .filter_map(|rule| rule.check(value).err())
                .map(|error| error_message(&error))
                .collect();
            if !messages.is_empty() {
                errors.insert((*field).to_owned(), messages);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
