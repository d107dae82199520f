//! Server-side relay for the digital twin: keeps the provider
//! credential off the client, forwards generation requests verbatim,
//! and serves the chat and portfolio endpoints.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tgateway::{ReplyGateway, SecretString};
//! use tgateway::adapters::gemini::{GeminiHttpTransport, GeminiProvider};
//! use trelay::{HttpRelayUpstream, RelayService, relay_router};
//!
//! let transport = GeminiHttpTransport::with_default_client().expect("client");
//! let provider = GeminiProvider::new(SecretString::new("sk-demo"), Arc::new(transport));
//! let gateway = ReplyGateway::new(Arc::new(provider));
//!
//! let upstream = HttpRelayUpstream::with_default_client().expect("client");
//! let service = RelayService::new(Some(SecretString::new("sk-demo")), Arc::new(upstream), gateway);
//! let _router = relay_router(Arc::new(service));
//! ```

mod routes;
mod service;
mod upstream;

pub use routes::relay_router;
pub use service::{RelayOutcome, RelayService};
pub use upstream::{HttpRelayUpstream, RelayUpstream, UpstreamReply};

pub mod prelude {
    pub use crate::{
        HttpRelayUpstream, RelayOutcome, RelayService, RelayUpstream, UpstreamReply, relay_router,
    };
}
