use std::sync::Arc;

use anyhow::Result;
use tgateway::adapters::gemini::{GeminiHttpTransport, GeminiProvider};
use tgateway::{ReplyGateway, SecretString, resolve_api_key};
use tobserve::{SafeGatewayHooks, TracingGatewayHooks};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use trelay::{HttpRelayUpstream, RelayService, relay_router};

const API_KEY_VARIABLE: &str = "GEMINI_API_KEY";
const ADDR_VARIABLE: &str = "TWIN_RELAY_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:8787";

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Fail closed: without a credential the relay still serves the
    // portfolio endpoints, and generation requests are rejected.
    let api_key = match resolve_api_key(API_KEY_VARIABLE) {
        Ok(key) => Some(key),
        Err(error) => {
            warn!(
                "{API_KEY_VARIABLE} is not usable ({error}); generation requests will be rejected"
            );
            None
        }
    };

    let transport = GeminiHttpTransport::with_default_client()?;
    let provider = GeminiProvider::new(
        api_key.clone().unwrap_or_else(|| SecretString::new("")),
        Arc::new(transport),
    );
    let gateway = ReplyGateway::new(Arc::new(provider))
        .with_hooks(Arc::new(SafeGatewayHooks::new(TracingGatewayHooks)));

    let upstream = HttpRelayUpstream::with_default_client()?;
    let service = RelayService::new(api_key, Arc::new(upstream), gateway);

    let addr = std::env::var(ADDR_VARIABLE).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("twin relay listening on {addr}");

    axum::serve(listener, relay_router(Arc::new(service))).await?;
    Ok(())
}
