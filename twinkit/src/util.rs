//! Small convenience constructors for common types.

use crate::{Message, ProviderError, Role};
use tgateway::adapters::gemini::REQUEST_TIMEOUT;

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

/// HTTP client preconfigured with the gateway's request timeout, for
/// callers that wire their own transports.
pub fn default_http_client() -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))
}
