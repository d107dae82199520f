//! Language model gateway: providers, persona, and failure-absorbing replies.
//!
//! The gateway turns one user utterance into one assistant utterance. Its
//! public contract is deliberately narrow: [`ReplyGateway::reply`] always
//! settles with displayable text, never with an error. Transport and
//! provider failures are normalized into persona fallback sentences and
//! reported to operators through [`GatewayHooks`].

pub mod adapters;

mod credentials;
mod error;
mod gateway;
mod model;
mod persona;
mod provider;

pub mod prelude {
    pub use crate::{
        FinishReason, GatewayHooks, GenerateRequest, GenerateResponse, Message,
        NoopGatewayHooks, ProviderError, ProviderErrorKind, ProviderFuture, ReplyGateway,
        ReplyProvider, Role, SecretString, TwinPersona, resolve_api_key,
    };
    pub use tcommon::SamplingOptions;
}

pub use credentials::{SecretString, resolve_api_key};
pub use error::{ProviderError, ProviderErrorKind};
pub use gateway::{GatewayHooks, NoopGatewayHooks, ReplyGateway};
pub use model::{FinishReason, GenerateRequest, GenerateResponse, Message, Role};
pub use persona::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, TwinPersona};
pub use provider::{ProviderFuture, ReplyProvider};
pub use tcommon::SamplingOptions;
