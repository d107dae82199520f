//! Google generative-language (Gemini) adapter.

mod provider;
mod serde_api;
mod transport;
mod types;

pub use provider::GeminiProvider;
pub use transport::{GeminiHttpTransport, GeminiTransport, REQUEST_TIMEOUT};
pub use types::{GeminiAuth, GeminiFinishReason, GeminiReply, GeminiRequest};
