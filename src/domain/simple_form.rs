//! src/domain/simple_form.rs

use crate::domain::SubmissionPayload;

pub const NICKNAME: &str = "nickname";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

/// The data entered into the demo form.
///
/// Missing fields deserialize to empty strings, so that `required` rules
/// report them instead of the parser.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SimpleForm {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

impl SimpleForm {
    /// look up a field value by its name
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            NICKNAME => Some(&self.nickname),
            EMAIL => Some(&self.email),
            PASSWORD => Some(&self.password),
            _ => None,
        }
    }

    pub fn to_payload(&self) -> SubmissionPayload {
        let mut payload = SubmissionPayload::new();
        payload.insert(NICKNAME.to_owned(), self.nickname.clone().into());
        payload.insert(EMAIL.to_owned(), self.email.clone().into());
        payload.insert(PASSWORD.to_owned(), self.password.clone().into());
        payload
    }
}
