//! Gemini adapter value types and conversions to shared models.

use crate::{FinishReason, GenerateRequest, GenerateResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeminiAuth {
    ApiKey(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiRequest {
    pub model: String,
    pub user_text: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl From<GenerateRequest> for GeminiRequest {
    fn from(value: GenerateRequest) -> Self {
        Self {
            model: value.model,
            user_text: value.user_text,
            system_instruction: value.system_instruction,
            temperature: value.options.temperature,
            max_output_tokens: value.options.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiFinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl From<GeminiFinishReason> for FinishReason {
    fn from(value: GeminiFinishReason) -> Self {
        match value {
            GeminiFinishReason::Stop => FinishReason::Stop,
            GeminiFinishReason::MaxTokens => FinishReason::MaxTokens,
            GeminiFinishReason::Safety => FinishReason::Safety,
            GeminiFinishReason::Other => FinishReason::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiReply {
    pub model: String,
    pub text: Option<String>,
    pub finish_reason: GeminiFinishReason,
}

impl GeminiReply {
    pub fn into_generate_response(self) -> GenerateResponse {
        GenerateResponse {
            model: self.model,
            text: self.text,
            finish_reason: self.finish_reason.into(),
        }
    }
}
