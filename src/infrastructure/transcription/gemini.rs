//! Gemini API transcriber adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::config::AppConfig;
use crate::domain::transcription::{InstructionPrompt, AUDIO_MIME_TYPE};

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
    response_mime_type: String,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini API transcriber
pub struct GeminiTranscriber {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiTranscriber {
    /// Create a new Gemini transcriber with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a transcriber pointed at a custom endpoint (for tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the API URL for the configured model
    fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    /// Build the request body: one user content with exactly two parts,
    /// the instruction text and the inline audio
    fn build_request(
        audio_b64: &str,
        prompt: &InstructionPrompt,
        config: &AppConfig,
    ) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part {
                        text: Some(prompt.content().to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: AUDIO_MIME_TYPE.to_string(),
                            data: audio_b64.to_string(),
                        }),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: config.temperature_or_default(),
                max_output_tokens: config.max_output_tokens_or_default(),
                response_mime_type: config.response_mime_type_or_default().to_string(),
            },
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }
}

#[async_trait]
impl Transcriber for GeminiTranscriber {
    async fn transcribe(
        &self,
        audio_b64: &str,
        prompt: &InstructionPrompt,
        config: &AppConfig,
    ) -> Result<String, TranscriptionError> {
        let url = self.api_url(config.model_or_default());
        let body = Self::build_request(audio_b64, prompt, config);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            // Surface the body-level message when the error payload parses
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            if let Ok(parsed) = serde_json::from_str::<GenerateContentResponse>(&error_text) {
                if let Some(error) = parsed.error {
                    return Err(TranscriptionError::ApiError(error.message));
                }
            }
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(TranscriptionError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(TranscriptionError::EmptyResponse)?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_has_two_parts_in_order() {
        let config = AppConfig::defaults();
        let prompt = InstructionPrompt::default();

        let request = GeminiTranscriber::build_request("QUJD", &prompt, &config);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[0].parts.len(), 2);

        let text_part = &request.contents[0].parts[0];
        assert_eq!(text_part.text.as_deref(), Some(prompt.content()));
        assert!(text_part.inline_data.is_none());

        let audio_part = &request.contents[0].parts[1];
        assert!(audio_part.text.is_none());
        let inline = audio_part.inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "audio/x-m4a");
        assert_eq!(inline.data, "QUJD");
    }

    #[test]
    fn build_request_carries_generation_config() {
        let config = AppConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(128),
            response_mime_type: Some("text/plain".to_string()),
            ..Default::default()
        };

        let request =
            GeminiTranscriber::build_request("QUJD", &InstructionPrompt::default(), &config);

        assert_eq!(request.generation_config.temperature, 0.7);
        assert_eq!(request.generation_config.max_output_tokens, 128);
        assert_eq!(request.generation_config.response_mime_type, "text/plain");
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = GeminiTranscriber::build_request(
            "QUJD",
            &InstructionPrompt::default(),
            &AppConfig::defaults(),
        );

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"maxOutputTokens\":512"));
        assert!(json.contains("\"responseMimeType\":\"text/plain\""));
        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\":\"audio/x-m4a\""));
    }

    #[test]
    fn api_url_contains_model_and_key() {
        let transcriber = GeminiTranscriber::new("test-api-key");
        let url = transcriber.api_url("gemini-2.0-flash");

        assert!(url.contains("gemini-2.0-flash"));
        assert!(url.contains("test-api-key"));
        assert!(url.contains("generateContent"));
    }

    #[test]
    fn custom_base_url() {
        let transcriber = GeminiTranscriber::with_base_url("key", "http://localhost:1234/models");
        let url = transcriber.api_url("some-model");

        assert!(url.starts_with("http://localhost:1234/models/some-model"));
    }

    #[test]
    fn extract_text_from_response() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![ResponsePart {
                        text: Some("Hello world".to_string()),
                    }]),
                }),
            }]),
            error: None,
        };

        let text = GeminiTranscriber::extract_text(&response);
        assert_eq!(text, Some("Hello world".to_string()));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = GenerateContentResponse {
            candidates: None,
            error: None,
        };

        let text = GeminiTranscriber::extract_text(&response);
        assert!(text.is_none());
    }

    #[test]
    fn extract_text_joins_multiple_parts() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![
                        ResponsePart {
                            text: Some("Hello ".to_string()),
                        },
                        ResponsePart {
                            text: Some("world".to_string()),
                        },
                    ]),
                }),
            }]),
            error: None,
        };

        let text = GeminiTranscriber::extract_text(&response);
        assert_eq!(text, Some("Hello world".to_string()));
    }
}
