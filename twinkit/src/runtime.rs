//! Runtime wiring helpers for chat widget usage.

use std::sync::Arc;

use crate::{
    ChatClient, GeminiHttpTransport, GeminiProvider, InMemorySettingsBackend, Message,
    ProviderError, ReplyGateway, ReplyProvider, SafeGatewayHooks, SecretString, SettingsBackend,
    ThemeSwitch, TracingGatewayHooks, TwinPersona,
};

/// A fully wired widget runtime: one gateway, one chat client, and the
/// viewer settings backend.
#[derive(Clone)]
pub struct RuntimeBundle {
    pub gateway: ReplyGateway,
    pub client: ChatClient,
    pub settings: Arc<dyn SettingsBackend>,
}

impl RuntimeBundle {
    pub fn theme_switch(&self) -> ThemeSwitch {
        ThemeSwitch::new(Arc::clone(&self.settings))
    }
}

pub fn in_memory_settings() -> Arc<dyn SettingsBackend> {
    Arc::new(InMemorySettingsBackend::new())
}

/// Gemini provider over a default HTTP client.
pub fn gemini_provider(api_key: SecretString) -> Result<Arc<dyn ReplyProvider>, ProviderError> {
    let transport = GeminiHttpTransport::with_default_client()?;
    Ok(Arc::new(GeminiProvider::new(api_key, Arc::new(transport))))
}

pub fn build_runtime(provider: Arc<dyn ReplyProvider>) -> RuntimeBundle {
    build_runtime_with(provider, in_memory_settings(), TwinPersona::default())
}

pub fn build_runtime_with_settings(
    provider: Arc<dyn ReplyProvider>,
    settings: Arc<dyn SettingsBackend>,
) -> RuntimeBundle {
    build_runtime_with(provider, settings, TwinPersona::default())
}

pub fn build_runtime_with(
    provider: Arc<dyn ReplyProvider>,
    settings: Arc<dyn SettingsBackend>,
    persona: TwinPersona,
) -> RuntimeBundle {
    let client = ChatClient::with_seed(Message::assistant(persona.seed_greeting.clone()));
    let gateway = ReplyGateway::new(provider)
        .with_persona(persona)
        .with_hooks(Arc::new(SafeGatewayHooks::new(TracingGatewayHooks)));

    RuntimeBundle {
        gateway,
        client,
        settings,
    }
}
