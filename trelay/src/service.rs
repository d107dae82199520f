//! Relay request handling, independent of the HTTP surface.

use std::sync::Arc;

use serde_json::{Value, json};
use tgateway::{DEFAULT_MODEL, ReplyGateway, SecretString};
use tprofile::{ProjectFilter, filter_projects};

use crate::upstream::RelayUpstream;

/// Outcome of one relay operation: the status code and JSON body the
/// HTTP layer should send, whatever routing produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayOutcome {
    pub status: u16,
    pub body: Value,
}

impl RelayOutcome {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }
}

/// Server-side relay between browser clients and the generation API.
///
/// The provider credential lives only here. When it is absent the relay
/// fails closed: generation requests are rejected before any upstream
/// traffic is attempted.
pub struct RelayService {
    api_key: Option<SecretString>,
    upstream: Arc<dyn RelayUpstream>,
    upstream_model: String,
    gateway: ReplyGateway,
}

impl RelayService {
    pub fn new(
        api_key: Option<SecretString>,
        upstream: Arc<dyn RelayUpstream>,
        gateway: ReplyGateway,
    ) -> Self {
        Self {
            api_key,
            upstream,
            upstream_model: DEFAULT_MODEL.to_string(),
            gateway,
        }
    }

    pub fn with_upstream_model(mut self, model: impl Into<String>) -> Self {
        self.upstream_model = model.into();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    /// Forwards a raw generation request body upstream and relays the
    /// upstream status and body verbatim.
    pub async fn forward_generate(&self, body: Value) -> RelayOutcome {
        let Some(api_key) = self.api_key.as_ref().filter(|key| !key.is_empty()) else {
            tracing::error!(
                phase = "relay",
                event = "generate_rejected",
                reason = "missing_credential"
            );
            return RelayOutcome::error(500, "GEMINI_API_KEY not set on server");
        };

        match self
            .upstream
            .forward(&self.upstream_model, body, api_key)
            .await
        {
            Ok(reply) => {
                tracing::info!(
                    phase = "relay",
                    event = "generate_forwarded",
                    upstream_status = reply.status
                );
                RelayOutcome::new(reply.status, reply.body)
            }
            Err(error) => {
                tracing::error!(
                    phase = "relay",
                    event = "generate_upstream_failure",
                    error_kind = ?error.kind,
                    error = %error
                );
                RelayOutcome::new(
                    502,
                    json!({
                        "error": "upstream request failed",
                        "details": error.message,
                    }),
                )
            }
        }
    }

    /// Answers one chat message through the reply gateway. Always
    /// produces text for non-blank input; the gateway absorbs provider
    /// failures into persona fallbacks.
    pub async fn chat(&self, message: &str) -> RelayOutcome {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return RelayOutcome::error(400, "message must not be empty");
        }

        let reply = self.gateway.reply(trimmed).await;
        RelayOutcome::new(200, json!({ "reply": reply }))
    }

    pub fn profile(&self) -> RelayOutcome {
        match serde_json::to_value(tprofile::data::profile()) {
            Ok(profile) => RelayOutcome::new(200, profile),
            Err(error) => RelayOutcome::error(500, format!("failed to serialize profile: {error}")),
        }
    }

    pub fn projects(&self, filter: Option<&str>) -> RelayOutcome {
        let filter = match filter {
            Some(label) => match ProjectFilter::from_label(label) {
                Some(filter) => filter,
                None => {
                    return RelayOutcome::error(400, format!("unknown project filter '{label}'"));
                }
            },
            None => ProjectFilter::All,
        };

        let projects = tprofile::data::projects();
        match serde_json::to_value(filter_projects(&projects, filter)) {
            Ok(body) => RelayOutcome::new(200, body),
            Err(error) => {
                RelayOutcome::error(500, format!("failed to serialize projects: {error}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;
    use tcommon::BoxFuture;
    use tgateway::{
        FinishReason, GenerateRequest, GenerateResponse, ProviderError, ProviderFuture,
        ReplyProvider,
    };

    use super::*;
    use crate::upstream::UpstreamReply;

    #[derive(Debug, Default)]
    struct FakeUpstream {
        reply: Option<UpstreamReply>,
        fail_with: Option<ProviderError>,
        captured: Mutex<Vec<(String, Value)>>,
    }

    impl RelayUpstream for FakeUpstream {
        fn forward<'a>(
            &'a self,
            model: &'a str,
            body: Value,
            _api_key: &'a SecretString,
        ) -> BoxFuture<'a, Result<UpstreamReply, ProviderError>> {
            Box::pin(async move {
                self.captured
                    .lock()
                    .expect("captured lock")
                    .push((model.to_string(), body));

                if let Some(error) = &self.fail_with {
                    return Err(error.clone());
                }

                Ok(self.reply.clone().unwrap_or(UpstreamReply {
                    status: 200,
                    body: json!({ "candidates": [] }),
                }))
            })
        }
    }

    #[derive(Debug)]
    struct EchoProvider;

    impl ReplyProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate<'a>(
            &'a self,
            request: GenerateRequest,
        ) -> ProviderFuture<'a, Result<GenerateResponse, ProviderError>> {
            Box::pin(async move {
                Ok(GenerateResponse {
                    model: request.model,
                    text: Some(format!("echo: {}", request.user_text)),
                    finish_reason: FinishReason::Stop,
                })
            })
        }
    }

    fn service_with(upstream: Arc<FakeUpstream>, api_key: Option<SecretString>) -> RelayService {
        let gateway = ReplyGateway::new(Arc::new(EchoProvider));
        RelayService::new(api_key, upstream, gateway)
    }

    #[tokio::test]
    async fn forward_generate_fails_closed_without_credential() {
        let upstream = Arc::new(FakeUpstream::default());
        let service = service_with(upstream.clone(), None);

        let outcome = service.forward_generate(json!({ "contents": [] })).await;

        assert_eq!(outcome.status, 500);
        assert_eq!(outcome.body["error"], "GEMINI_API_KEY not set on server");
        assert!(upstream.captured.lock().expect("captured lock").is_empty());
    }

    #[tokio::test]
    async fn forward_generate_treats_blank_credential_as_missing() {
        let upstream = Arc::new(FakeUpstream::default());
        let service = service_with(upstream.clone(), Some(SecretString::new("")));

        let outcome = service.forward_generate(json!({})).await;

        assert_eq!(outcome.status, 500);
        assert!(upstream.captured.lock().expect("captured lock").is_empty());
    }

    #[tokio::test]
    async fn forward_generate_relays_upstream_status_and_body_verbatim() {
        let upstream = Arc::new(FakeUpstream {
            reply: Some(UpstreamReply {
                status: 429,
                body: json!({ "error": { "message": "quota exceeded" } }),
            }),
            ..FakeUpstream::default()
        });
        let service = service_with(upstream.clone(), Some(SecretString::new("sk-test")));

        let request_body = json!({ "contents": [{ "parts": [{ "text": "hi" }] }] });
        let outcome = service.forward_generate(request_body.clone()).await;

        assert_eq!(outcome.status, 429);
        assert_eq!(outcome.body["error"]["message"], "quota exceeded");

        let captured = upstream.captured.lock().expect("captured lock");
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0, DEFAULT_MODEL);
        assert_eq!(captured[0].1, request_body);
    }

    #[tokio::test]
    async fn forward_generate_maps_transport_failure_to_bad_gateway() {
        let upstream = Arc::new(FakeUpstream {
            fail_with: Some(ProviderError::transport("connection refused")),
            ..FakeUpstream::default()
        });
        let service = service_with(upstream, Some(SecretString::new("sk-test")));

        let outcome = service.forward_generate(json!({})).await;

        assert_eq!(outcome.status, 502);
        assert_eq!(outcome.body["error"], "upstream request failed");
        assert_eq!(outcome.body["details"], "connection refused");
    }

    #[tokio::test]
    async fn chat_rejects_blank_messages() {
        let service = service_with(Arc::new(FakeUpstream::default()), None);

        let outcome = service.chat("   ").await;
        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body["error"], "message must not be empty");
    }

    #[tokio::test]
    async fn chat_replies_through_the_gateway() {
        let service = service_with(Arc::new(FakeUpstream::default()), None);

        let outcome = service.chat("  hello  ").await;
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.body["reply"], "echo: hello");
    }

    #[tokio::test]
    async fn profile_and_projects_serve_portfolio_content() {
        let service = service_with(Arc::new(FakeUpstream::default()), None);

        let profile = service.profile();
        assert_eq!(profile.status, 200);
        assert!(profile.body["projects"].as_array().is_some_and(|p| !p.is_empty()));

        let all = service.projects(None);
        assert_eq!(all.status, 200);
        let all_len = all.body.as_array().expect("projects array").len();

        let quality = service.projects(Some("Quality"));
        assert_eq!(quality.status, 200);
        assert!(quality.body.as_array().expect("projects array").len() < all_len);

        let unknown = service.projects(Some("bogus"));
        assert_eq!(unknown.status, 400);
    }
}
