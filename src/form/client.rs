//! src/form/client.rs

use crate::api::{MockApi, UNPROCESSABLE_ENTITY};
use crate::configuration::Settings;
use crate::domain::{FieldErrors, SimpleForm, NICKNAME};
use crate::error::FormResult;
use crate::form::FormRules;
use crate::validators::Locale;

/// What happened to a submitted form.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", content = "errors", rename_all = "snake_case")]
pub enum FormOutcome {
    Submitted,
    /// Field errors to show next to the inputs.
    Rejected(FieldErrors),
}

fn nickname_taken_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Никнейм уже занят",
        Locale::En => "Nickname is already taken",
    }
}

/// Drives a form through validation, the nickname check and submission.
pub struct FormClient {
    api: MockApi,
    rules: FormRules,
    locale: Locale,
}

impl FormClient {
    pub fn new(api: MockApi, rules: FormRules, locale: Locale) -> Self {
        Self { api, rules, locale }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.api.client(),
            FormRules::from_settings(&settings.validation),
            settings.validation.locale,
        )
    }

    #[tracing::instrument(
        name = "Submitting simple form.",
        skip(self, form),
        fields(
            nickname = %form.nickname,
            email = %form.email
        )
    )]
    pub async fn submit(&self, form: &SimpleForm) -> FormResult<FormOutcome> {
        if let Err(errors) = self.rules.validate(form) {
            tracing::info!("Form failed validation.");
            return Ok(FormOutcome::Rejected(errors));
        }

        if !self.api.check_nickname_for_uniq_request(&form.nickname).await {
            return Ok(FormOutcome::Rejected(FieldErrors::from([(
                NICKNAME.to_owned(),
                vec![nickname_taken_message(self.locale).to_owned()],
            )])));
        }

        match self.api.submit_form_request(&form.to_payload()).await {
            Ok(_) => Ok(FormOutcome::Submitted),
            // field errors from the api are shown like our own
            Err(err) if err.status == UNPROCESSABLE_ENTITY => {
                Ok(FormOutcome::Rejected(err.params))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for FormClient {
    fn default() -> Self {
        Self::new(MockApi::default(), FormRules::default(), Locale::default())
    }
}
