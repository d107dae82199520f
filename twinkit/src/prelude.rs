//! Common imports for most twinkit applications.

pub use crate::{
    assistant_message, build_runtime, build_runtime_with, build_runtime_with_settings,
    default_http_client, gemini_provider, in_memory_settings, user_message,
};
pub use crate::{tw_messages, tw_msg};
pub use crate::{
    BoxFuture, ChatClient, Conversation, ConversationId, GatewayHooks, GenerateRequest,
    GenerateResponse, Generation, Message, MetricsGatewayHooks, Profile, Project, ProjectFilter,
    ProviderError, ProviderErrorKind, ReplyGateway, ReplyProvider, Role, RuntimeBundle,
    SafeGatewayHooks, SamplingOptions, SecretString, Settings, SettingsBackend, SettleOutcome,
    SubmitOutcome, ThemeMode, ThemeSwitch, TracingGatewayHooks, TurnOutcome, TurnTicket,
    TwinPersona, filter_projects, run_turn,
};
