//! Upstream trait and reqwest-based passthrough to the Gemini API.

use reqwest::Client;
use serde_json::Value;
use tcommon::BoxFuture;
use tgateway::ProviderError;
use tgateway::adapters::gemini::REQUEST_TIMEOUT;
use tgateway::SecretString;

/// Raw reply from the generation API: upstream's own status code plus
/// its unmodified JSON body. The relay forwards both verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

pub trait RelayUpstream: Send + Sync {
    fn forward<'a>(
        &'a self,
        model: &'a str,
        body: Value,
        api_key: &'a SecretString,
    ) -> BoxFuture<'a, Result<UpstreamReply, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct HttpRelayUpstream {
    client: Client,
    base_url: String,
}

impl HttpRelayUpstream {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn with_default_client() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ProviderError::transport(err.to_string()))?;
        Ok(Self::new(client))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

impl RelayUpstream for HttpRelayUpstream {
    fn forward<'a>(
        &'a self,
        model: &'a str,
        body: Value,
        api_key: &'a SecretString,
    ) -> BoxFuture<'a, Result<UpstreamReply, ProviderError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.endpoint(model))
                // Credential travels in a header, never in the URL.
                .header("x-goog-api-key", api_key.expose())
                .json(&body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ProviderError::timeout(err.to_string())
                    } else {
                        ProviderError::transport(err.to_string())
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .json::<Value>()
                .await
                .map_err(|err| ProviderError::transport(err.to_string()))?;

            Ok(UpstreamReply { status, body })
        })
    }
}
