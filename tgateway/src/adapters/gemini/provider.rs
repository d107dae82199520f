//! Gemini provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    GenerateRequest, GenerateResponse, ProviderError, ProviderFuture, ReplyProvider,
    SecretString,
};

use super::transport::GeminiTransport;
use super::types::{GeminiAuth, GeminiRequest};

pub struct GeminiProvider {
    api_key: SecretString,
    transport: Arc<dyn GeminiTransport>,
    fallback_model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, transport: Arc<dyn GeminiTransport>) -> Self {
        Self {
            api_key,
            transport,
            fallback_model: crate::persona::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = model.into();
        self
    }

    fn build_gemini_request(&self, request: GenerateRequest) -> GeminiRequest {
        let mut gemini = GeminiRequest::from(request);
        if gemini.model.trim().is_empty() {
            gemini.model = self.fallback_model.clone();
        }

        gemini
    }
}

impl ReplyProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate<'a>(
        &'a self,
        request: GenerateRequest,
    ) -> ProviderFuture<'a, Result<GenerateResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            if self.api_key.is_empty() {
                return Err(ProviderError::authentication("Gemini api key is empty"));
            }

            let gemini_request = self.build_gemini_request(request);
            let auth = GeminiAuth::ApiKey(self.api_key.expose().to_string());
            let reply = self.transport.generate(gemini_request, auth).await?;
            Ok(reply.into_generate_response())
        })
    }
}
