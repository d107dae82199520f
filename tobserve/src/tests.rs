use std::sync::{Arc, Mutex};

use tgateway::{GatewayHooks, ProviderError};

use crate::{MetricsGatewayHooks, SafeGatewayHooks, TracingGatewayHooks};

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    let hooks = TracingGatewayHooks;
    let error = ProviderError::timeout("provider timeout");

    hooks.on_reply_start("gemini");
    hooks.on_reply_served("gemini", 42);
    hooks.on_blank_reply("gemini");
    hooks.on_provider_failure("gemini", &error);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    let hooks = MetricsGatewayHooks;
    let error = ProviderError::timeout("provider timeout");

    hooks.on_reply_start("gemini");
    hooks.on_reply_served("gemini", 42);
    hooks.on_blank_reply("gemini");
    hooks.on_provider_failure("gemini", &error);
}

#[derive(Default, Clone)]
struct RecordingGatewayHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl GatewayHooks for RecordingGatewayHooks {
    fn on_reply_start(&self, _provider: &str) {
        self.events.lock().expect("events lock").push("start");
    }

    fn on_reply_served(&self, _provider: &str, _chars: usize) {
        self.events.lock().expect("events lock").push("served");
    }

    fn on_blank_reply(&self, _provider: &str) {
        self.events.lock().expect("events lock").push("blank");
    }

    fn on_provider_failure(&self, _provider: &str, _error: &ProviderError) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicGatewayHooks;

impl GatewayHooks for PanicGatewayHooks {
    fn on_reply_start(&self, _provider: &str) {
        panic!("start panic");
    }

    fn on_reply_served(&self, _provider: &str, _chars: usize) {
        panic!("served panic");
    }

    fn on_blank_reply(&self, _provider: &str) {
        panic!("blank panic");
    }

    fn on_provider_failure(&self, _provider: &str, _error: &ProviderError) {
        panic!("failure panic");
    }
}

#[test]
fn safe_gateway_hooks_delegate_when_inner_succeeds() {
    let inner = RecordingGatewayHooks::default();
    let events = Arc::clone(&inner.events);
    let hooks = SafeGatewayHooks::new(inner);
    let error = ProviderError::timeout("provider timeout");

    hooks.on_reply_start("gemini");
    hooks.on_reply_served("gemini", 42);
    hooks.on_blank_reply("gemini");
    hooks.on_provider_failure("gemini", &error);

    assert_eq!(events.lock().expect("events lock").len(), 4);
}

#[test]
fn safe_gateway_hooks_swallow_panics() {
    let hooks = SafeGatewayHooks::new(PanicGatewayHooks);
    let error = ProviderError::timeout("provider timeout");

    hooks.on_reply_start("gemini");
    hooks.on_reply_served("gemini", 42);
    hooks.on_blank_reply("gemini");
    hooks.on_provider_failure("gemini", &error);
}
