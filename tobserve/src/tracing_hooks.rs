//! Tracing-based observability hooks for gateway reply activity.
//!
//! ```rust
//! use tgateway::GatewayHooks;
//! use tobserve::TracingGatewayHooks;
//!
//! fn accepts_gateway_hooks(_hooks: &dyn GatewayHooks) {}
//!
//! let hooks = TracingGatewayHooks;
//! accepts_gateway_hooks(&hooks);
//! ```

use tgateway::{GatewayHooks, ProviderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingGatewayHooks;

impl GatewayHooks for TracingGatewayHooks {
    fn on_reply_start(&self, provider: &str) {
        tracing::info!(phase = "gateway", event = "reply_start", provider);
    }

    fn on_reply_served(&self, provider: &str, chars: usize) {
        tracing::info!(
            phase = "gateway",
            event = "reply_served",
            provider,
            chars
        );
    }

    fn on_blank_reply(&self, provider: &str) {
        tracing::warn!(phase = "gateway", event = "blank_reply", provider);
    }

    fn on_provider_failure(&self, provider: &str, error: &ProviderError) {
        tracing::error!(
            phase = "gateway",
            event = "provider_failure",
            provider,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}
