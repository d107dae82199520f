use std::sync::Arc;

use tchat::{ChatClient, TurnOutcome, run_turn};
use tgateway::{
    FinishReason, GenerateRequest, GenerateResponse, ProviderError, ProviderFuture,
    ReplyGateway, ReplyProvider,
};

#[derive(Debug)]
enum FakeBehavior {
    Text(&'static str),
    Blank,
    Fail,
}

#[derive(Debug)]
struct FakeProvider {
    behavior: FakeBehavior,
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
            // Yield once so the turn is observably in flight.
            futures_timer::Delay::new(std::time::Duration::from_millis(1)).await;

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
                FakeBehavior::Fail => Err(ProviderError::unavailable("model overloaded")),
            }
        })
    }
}

fn gateway(behavior: FakeBehavior) -> ReplyGateway {
    ReplyGateway::new(Arc::new(FakeProvider { behavior }))
}

#[tokio::test]
async fn run_turn_appends_user_and_assistant_messages() {
    let gateway = gateway(FakeBehavior::Text("I build quality-first platforms."));
    let mut client = ChatClient::new();
    let before = client.messages().len();

    let outcome = run_turn(&mut client, &gateway, "What do you build?").await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(client.messages().len(), before + 2);
    assert!(!client.is_awaiting_reply());
    assert_eq!(
        client.messages().last().map(|m| m.content.as_str()),
        Some("I build quality-first platforms.")
    );
}

#[tokio::test]
async fn run_turn_settles_with_clarification_fallback_on_blank_reply() {
    let gateway = gateway(FakeBehavior::Blank);
    let mut client = ChatClient::new();

    let outcome = run_turn(&mut client, &gateway, "hello").await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(
        client.messages().last().map(|m| m.content.as_str()),
        Some(gateway.persona().clarification_fallback.as_str())
    );
}

#[tokio::test]
async fn run_turn_settles_with_unavailable_fallback_on_provider_failure() {
    let gateway = gateway(FakeBehavior::Fail);
    let mut client = ChatClient::new();
    let before = client.messages().len();

    let outcome = run_turn(&mut client, &gateway, "hello").await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(client.messages().len(), before + 2);
    assert_eq!(
        client.messages().last().map(|m| m.content.as_str()),
        Some(gateway.persona().unavailable_fallback.as_str())
    );
}

#[tokio::test]
async fn run_turn_ignores_blank_input() {
    let gateway = gateway(FakeBehavior::Text("unused"));
    let mut client = ChatClient::new();
    let before = client.messages().len();

    let outcome = run_turn(&mut client, &gateway, "   ").await;

    assert_eq!(outcome, TurnOutcome::IgnoredEmpty);
    assert_eq!(client.messages().len(), before);
}
