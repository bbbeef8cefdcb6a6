//! src/validators/message.rs

use crate::validators::{Rule, RuleParams};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use validator::ValidationError;

/// Where the failure message of a decorated rule comes from.
#[derive(Clone)]
pub enum MessageSource {
    Static(Cow<'static, str>),
    /// Built from the rule's params when the check fails.
    Dynamic(Arc<dyn Fn(&RuleParams) -> String + Send + Sync>),
}

impl MessageSource {
    pub fn dynamic(render: impl Fn(&RuleParams) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(render))
    }

    pub fn render(&self, params: &RuleParams) -> Cow<'static, str> {
        match self {
            MessageSource::Static(message) => message.clone(),
            MessageSource::Dynamic(render) => Cow::Owned(render(params)),
        }
    }
}

impl fmt::Debug for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSource::Static(message) => f.debug_tuple("Static").field(message).finish(),
            MessageSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&'static str> for MessageSource {
    fn from(message: &'static str) -> Self {
        Self::Static(Cow::Borrowed(message))
    }
}

impl From<String> for MessageSource {
    fn from(message: String) -> Self {
        Self::Static(Cow::Owned(message))
    }
}

/// A rule decorated with a message override.
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    rule: R,
    message: MessageSource,
}

/// Attach `message` to `rule`. The result is itself a [`Rule`].
pub fn with_message<R: Rule>(message: impl Into<MessageSource>, rule: R) -> WithMessage<R> {
    WithMessage {
        rule,
        message: message.into(),
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    fn code(&self) -> &'static str {
        self.rule.code()
    }

    fn params(&self) -> RuleParams {
        self.rule.params()
    }

    fn is_valid(&self, value: &str) -> bool {
        self.rule.is_valid(value)
    }

    fn check(&self, value: &str) -> Result<(), ValidationError> {
        self.rule.check(value).map_err(|mut error| {
            error.message = Some(self.message.render(&self.rule.params()));
            error
        })
    }
}
