//! Unified facade over the twinkit workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core twinkit crates and provides convenience utilities
//! and macros for common setup and chat flows.

mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use tchat;
pub use tcommon;
pub use tgateway;
pub use tobserve;
pub use tprofile;
pub use tsettings;

pub use tchat::{
    ChatClient, Conversation, ROTATION_INTERVAL, SettleOutcome, StatusRotation, StatusTicker,
    SubmitOutcome, THINKING_STATUSES, TurnOutcome, TurnTicket, run_turn,
};
pub use tcommon::{BoxFuture, ConversationId, Generation, SamplingOptions};
pub use tgateway::adapters::gemini::{GeminiHttpTransport, GeminiProvider, GeminiTransport};
pub use tgateway::{
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, FinishReason, GatewayHooks, GenerateRequest,
    GenerateResponse, Message, NoopGatewayHooks, ProviderError, ProviderErrorKind, ProviderFuture,
    ReplyGateway, ReplyProvider, Role, SecretString, TwinPersona, resolve_api_key,
};
pub use tobserve::{MetricsGatewayHooks, SafeGatewayHooks, TracingGatewayHooks};
pub use tprofile::{
    Certification, Education, Experience, Profile, Project, ProjectFilter, Skill, SkillCategory,
    filter_projects,
};
pub use tsettings::{
    FilesystemSettingsBackend, InMemorySettingsBackend, Settings, SettingsBackend,
    SettingsBackendConfig, SettingsError, SettingsErrorKind, ThemeMode, ThemeSwitch,
    create_default_settings_backend, create_settings_backend,
};

pub use runtime::{
    RuntimeBundle, build_runtime, build_runtime_with, build_runtime_with_settings,
    gemini_provider, in_memory_settings,
};
pub use util::{assistant_message, default_http_client, user_message};
