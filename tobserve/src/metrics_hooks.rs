//! Metrics-based observability hooks for gateway reply activity.
//!
//! ```rust
//! use tgateway::GatewayHooks;
//! use tobserve::MetricsGatewayHooks;
//!
//! fn accepts_gateway_hooks(_hooks: &dyn GatewayHooks) {}
//!
//! let hooks = MetricsGatewayHooks;
//! accepts_gateway_hooks(&hooks);
//! ```

use tgateway::{GatewayHooks, ProviderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsGatewayHooks;

impl GatewayHooks for MetricsGatewayHooks {
    fn on_reply_start(&self, provider: &str) {
        metrics::counter!(
            "twinkit_gateway_reply_start_total",
            "provider" => provider.to_string()
        )
        .increment(1);
    }

    fn on_reply_served(&self, provider: &str, chars: usize) {
        metrics::counter!(
            "twinkit_gateway_reply_served_total",
            "provider" => provider.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "twinkit_gateway_reply_chars",
            "provider" => provider.to_string()
        )
        .record(chars as f64);
    }

    fn on_blank_reply(&self, provider: &str) {
        metrics::counter!(
            "twinkit_gateway_blank_reply_total",
            "provider" => provider.to_string()
        )
        .increment(1);
    }

    fn on_provider_failure(&self, provider: &str, error: &ProviderError) {
        metrics::counter!(
            "twinkit_gateway_provider_failure_total",
            "provider" => provider.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
