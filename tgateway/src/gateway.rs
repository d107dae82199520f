//! Failure-absorbing reply gateway over a provider.

use std::sync::Arc;

use tcommon::SamplingOptions;

use crate::{GenerateRequest, ProviderError, ReplyProvider, TwinPersona};

/// Operational hooks for gateway activity. Implementations live in the
/// observability crate; the gateway itself stays dependency-free.
pub trait GatewayHooks: Send + Sync {
    fn on_reply_start(&self, _provider: &str) {}

    fn on_reply_served(&self, _provider: &str, _chars: usize) {}

    fn on_blank_reply(&self, _provider: &str) {}

    fn on_provider_failure(&self, _provider: &str, _error: &ProviderError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGatewayHooks;

impl GatewayHooks for NoopGatewayHooks {}

/// Translates one user utterance into one assistant utterance.
///
/// Contract: [`ReplyGateway::reply`] always resolves with text, never
/// with an error. A blank provider reply becomes the persona's
/// clarification fallback; any provider failure becomes the persona's
/// unavailable fallback and is reported through [`GatewayHooks`].
#[derive(Clone)]
pub struct ReplyGateway {
    provider: Arc<dyn ReplyProvider>,
    persona: TwinPersona,
    hooks: Arc<dyn GatewayHooks>,
}

impl ReplyGateway {
    pub fn new(provider: Arc<dyn ReplyProvider>) -> Self {
        Self {
            provider,
            persona: TwinPersona::default(),
            hooks: Arc::new(NoopGatewayHooks),
        }
    }

    pub fn with_persona(mut self, persona: TwinPersona) -> Self {
        self.persona = persona;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn GatewayHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn persona(&self) -> &TwinPersona {
        &self.persona
    }

    pub async fn reply(&self, user_text: &str) -> String {
        let provider_name = self.provider.name().to_string();
        self.hooks.on_reply_start(&provider_name);

        let request = GenerateRequest::new(self.persona.model.clone(), user_text)
            .with_system_instruction(self.persona.system_instruction.clone())
            .with_options(SamplingOptions::default().with_temperature(self.persona.temperature));

        match self.provider.generate(request).await {
            Ok(response) => match response.text {
                Some(text) if !text.trim().is_empty() => {
                    self.hooks.on_reply_served(&provider_name, text.chars().count());
                    text
                }
                _ => {
                    self.hooks.on_blank_reply(&provider_name);
                    self.persona.clarification_fallback.clone()
                }
            },
            Err(error) => {
                self.hooks.on_provider_failure(&provider_name, &error);
                self.persona.unavailable_fallback.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{FinishReason, GenerateResponse, ProviderFuture};

    #[derive(Debug)]
    enum FakeBehavior {
        Text(&'static str),
        Blank,
        Fail,
    }

    #[derive(Debug)]
    struct FakeProvider {
        behavior: FakeBehavior,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl FakeProvider {
        fn new(behavior: FakeBehavior) -> Self {
            Self {
                behavior,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ReplyProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn generate<'a>(
            &'a self,
            request: GenerateRequest,
        ) -> ProviderFuture<'a, Result<GenerateResponse, ProviderError>> {
            Box::pin(async move {
                self.requests
                    .lock()
                    .expect("requests lock")
                    .push(request.clone());

                match self.behavior {
                    FakeBehavior::Text(text) => Ok(GenerateResponse {
                        model: request.model,
                        text: Some(text.to_string()),
                        finish_reason: FinishReason::Stop,
                    }),
                    FakeBehavior::Blank => Ok(GenerateResponse {
                        model: request.model,
                        text: None,
                        finish_reason: FinishReason::Stop,
                    }),
                    FakeBehavior::Fail => {
                        Err(ProviderError::transport("connection refused"))
                    }
                }
            })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl GatewayHooks for RecordingHooks {
        fn on_reply_start(&self, provider: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{provider}"));
        }

        fn on_reply_served(&self, provider: &str, chars: usize) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("served:{provider}:{chars}"));
        }

        fn on_blank_reply(&self, provider: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("blank:{provider}"));
        }

        fn on_provider_failure(&self, provider: &str, error: &ProviderError) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{provider}:{:?}", error.kind));
        }
    }

    #[tokio::test]
    async fn reply_returns_provider_text_and_carries_persona_settings() {
        let provider = Arc::new(FakeProvider::new(FakeBehavior::Text("hello there")));
        let gateway = ReplyGateway::new(provider.clone());

        let reply = gateway.reply("What is your engineering philosophy?").await;
        assert_eq!(reply, "hello there");

        let requests = provider.requests.lock().expect("requests lock");
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.model, crate::persona::DEFAULT_MODEL);
        assert_eq!(sent.options.temperature, Some(crate::persona::DEFAULT_TEMPERATURE));
        assert!(sent.system_instruction.as_deref().is_some_and(|instruction| {
            instruction.contains("Digital Twin")
        }));
        assert_eq!(sent.user_text, "What is your engineering philosophy?");
    }

    #[tokio::test]
    async fn reply_substitutes_clarification_fallback_for_blank_text() {
        let hooks = Arc::new(RecordingHooks::default());
        let gateway = ReplyGateway::new(Arc::new(FakeProvider::new(FakeBehavior::Blank)))
            .with_hooks(hooks.clone());

        let reply = gateway.reply("hi").await;
        assert_eq!(reply, gateway.persona().clarification_fallback);

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(events, vec!["start:fake".to_string(), "blank:fake".to_string()]);
    }

    #[tokio::test]
    async fn reply_absorbs_provider_failure_into_unavailable_fallback() {
        let hooks = Arc::new(RecordingHooks::default());
        let gateway = ReplyGateway::new(Arc::new(FakeProvider::new(FakeBehavior::Fail)))
            .with_hooks(hooks.clone());

        let reply = gateway.reply("hi").await;
        assert_eq!(reply, gateway.persona().unavailable_fallback);

        let events = hooks.events.lock().expect("events lock").clone();
        assert!(events.contains(&"failure:fake:Transport".to_string()));
    }
}
