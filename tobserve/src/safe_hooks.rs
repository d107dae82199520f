use std::panic::{AssertUnwindSafe, catch_unwind};

use tgateway::{GatewayHooks, ProviderError};

pub struct SafeGatewayHooks<H> {
    inner: H,
}

impl<H> SafeGatewayHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> GatewayHooks for SafeGatewayHooks<H>
where
    H: GatewayHooks,
{
    fn on_reply_start(&self, provider: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_reply_start(provider)));
    }

    fn on_reply_served(&self, provider: &str, chars: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_reply_served(provider, chars)
        }));
    }

    fn on_blank_reply(&self, provider: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_blank_reply(provider)));
    }

    fn on_provider_failure(&self, provider: &str, error: &ProviderError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_provider_failure(provider, error)
        }));
    }
}
