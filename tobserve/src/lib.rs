//! Production-friendly observability hooks for gateway reply activity.
//!
//! ```rust
//! use tobserve::{MetricsGatewayHooks, SafeGatewayHooks, TracingGatewayHooks};
//!
//! let _gateway_hooks = SafeGatewayHooks::new(TracingGatewayHooks);
//! let _metrics = MetricsGatewayHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsGatewayHooks;
pub use safe_hooks::SafeGatewayHooks;
pub use tracing_hooks::TracingGatewayHooks;

pub mod prelude {
    pub use crate::{MetricsGatewayHooks, SafeGatewayHooks, TracingGatewayHooks};
}

#[cfg(test)]
mod tests;
