use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::traits::ResolvableConfiguration;

/// Messages subjects broadcast when the caller does not provide one.
#[derive(Clone, Debug)]
pub struct MessagesConfiguration {
    pub default_message: String,
    pub business_logic_message: String,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub(crate) struct UnresolvedMessagesConfiguration {
    default_message: String,
    business_logic_message: String,
}

impl Default for UnresolvedMessagesConfiguration {
    fn default() -> Self {
        Self {
            default_message: "Empty".to_string(),
            business_logic_message: "change message message".to_string(),
        }
    }
}

/// Console output is line-oriented, so a message must fit on one line.
fn ensure_single_line(
    key: &'static str,
    message: String,
) -> Result<String, ConfigurationError> {
    if message.contains(['\n', '\r']) {
        return Err(ConfigurationError::InvalidValue {
            key,
            reason: "message must not contain line breaks".to_string(),
        });
    }

    Ok(message)
}

impl ResolvableConfiguration for UnresolvedMessagesConfiguration {
    type Resolved = MessagesConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        Ok(MessagesConfiguration {
            default_message: ensure_single_line(
                "messages.default_message",
                self.default_message,
            )?,
            business_logic_message: ensure_single_line(
                "messages.business_logic_message",
                self.business_logic_message,
            )?,
        })
    }
}
