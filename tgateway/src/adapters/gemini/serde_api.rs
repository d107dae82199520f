//! Gemini HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::ProviderError;

use super::types::{GeminiFinishReason, GeminiReply, GeminiRequest};

pub(crate) fn build_api_request(
    request: GeminiRequest,
) -> Result<GeminiApiRequest, ProviderError> {
    if request.user_text.trim().is_empty() {
        return Err(ProviderError::invalid_request(
            "Gemini request requires non-empty user text",
        ));
    }

    let generation_config = if request.temperature.is_some() || request.max_output_tokens.is_some()
    {
        Some(GeminiApiGenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        })
    } else {
        None
    };

    Ok(GeminiApiRequest {
        contents: vec![GeminiApiContent::text(request.user_text)],
        system_instruction: request.system_instruction.map(GeminiApiContent::text),
        generation_config,
    })
}

pub(crate) fn parse_finish_reason(value: Option<&str>) -> GeminiFinishReason {
    match value {
        Some("STOP") => GeminiFinishReason::Stop,
        Some("MAX_TOKENS") => GeminiFinishReason::MaxTokens,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            GeminiFinishReason::Safety
        }
        _ => GeminiFinishReason::Other,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GeminiApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiRequest {
    pub contents: Vec<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiContent {
    pub parts: Vec<GeminiApiPart>,
}

impl GeminiApiContent {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiApiPart { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiApiCandidate>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiCandidate {
    pub content: Option<GeminiApiContent>,
    pub finish_reason: Option<String>,
}

impl GeminiApiResponse {
    pub(crate) fn into_reply(self, fallback_model: String) -> GeminiReply {
        let model = self.model_version.unwrap_or(fallback_model);

        let Some(candidate) = self.candidates.into_iter().next() else {
            // A successful status with no candidates is the "blank
            // reply" case, not a transport failure.
            return GeminiReply {
                model,
                text: None,
                finish_reason: GeminiFinishReason::Other,
            };
        };

        let finish_reason = parse_finish_reason(candidate.finish_reason.as_deref());
        let text = candidate.content.map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        });

        GeminiReply {
            model,
            text: text.filter(|value| !value.trim().is_empty()),
            finish_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_api_request_serializes_expected_wire_shape() {
        let request = GeminiRequest {
            model: "gemini-3-pro-preview".to_string(),
            user_text: "hello".to_string(),
            system_instruction: Some("be concise".to_string()),
            temperature: Some(0.7),
            max_output_tokens: None,
        };

        let api_request = build_api_request(request).expect("request should build");
        let json = serde_json::to_value(&api_request).expect("request should serialize");

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be concise");
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn build_api_request_rejects_blank_user_text() {
        let request = GeminiRequest {
            model: "gemini-3-pro-preview".to_string(),
            user_text: "   ".to_string(),
            system_instruction: None,
            temperature: None,
            max_output_tokens: None,
        };

        let error = build_api_request(request).expect_err("blank text must fail");
        assert_eq!(error.kind, crate::ProviderErrorKind::InvalidRequest);
    }

    #[test]
    fn response_with_candidates_concatenates_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Quality"}, {"text": "-first."}]},
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-3-pro-preview"
        }"#;

        let parsed =
            serde_json::from_str::<GeminiApiResponse>(body).expect("body should parse");
        let reply = parsed.into_reply("fallback".to_string());

        assert_eq!(reply.model, "gemini-3-pro-preview");
        assert_eq!(reply.text.as_deref(), Some("Quality-first."));
        assert_eq!(reply.finish_reason, GeminiFinishReason::Stop);
    }

    #[test]
    fn response_without_candidates_is_a_blank_reply() {
        let parsed = serde_json::from_str::<GeminiApiResponse>("{}").expect("body should parse");
        let reply = parsed.into_reply("gemini-3-pro-preview".to_string());

        assert_eq!(reply.model, "gemini-3-pro-preview");
        assert_eq!(reply.text, None);
    }

    #[test]
    fn whitespace_only_candidate_text_maps_to_none() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "   "}]},
                "finishReason": "STOP"
            }]
        }"#;

        let parsed =
            serde_json::from_str::<GeminiApiResponse>(body).expect("body should parse");
        let reply = parsed.into_reply("gemini-3-pro-preview".to_string());
        assert_eq!(reply.text, None);
    }

    #[test]
    fn extract_error_message_reads_error_envelope() {
        let body = r#"{"error": {"message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("API key not valid")
        );
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn finish_reason_parsing_covers_known_values() {
        assert_eq!(parse_finish_reason(Some("STOP")), GeminiFinishReason::Stop);
        assert_eq!(
            parse_finish_reason(Some("MAX_TOKENS")),
            GeminiFinishReason::MaxTokens
        );
        assert_eq!(
            parse_finish_reason(Some("SAFETY")),
            GeminiFinishReason::Safety
        );
        assert_eq!(parse_finish_reason(None), GeminiFinishReason::Other);
    }
}
