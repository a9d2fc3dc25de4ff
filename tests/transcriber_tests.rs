//! Gemini adapter integration tests against a mock endpoint

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use telugu_scribe::application::ports::{Transcriber, TranscriptionError};
use telugu_scribe::domain::config::AppConfig;
use telugu_scribe::domain::transcription::InstructionPrompt;
use telugu_scribe::infrastructure::GeminiTranscriber;

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }]
            }
        }]
    })
}

#[tokio::test]
async fn successful_call_returns_text_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("hello world")))
        .expect(1)
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    let text = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap();

    assert_eq!(text, "hello world");
}

#[tokio::test]
async fn request_carries_prompt_audio_and_generation_config() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": "Please transcribe this Telugu audio to English text." },
                { "inlineData": { "mimeType": "audio/x-m4a", "data": "QUJD" } }
            ]
        }],
        "generationConfig": {
            "temperature": 0.2,
            "maxOutputTokens": 512,
            "responseMimeType": "text/plain"
        }
    });

    Mock::given(method("POST"))
        .and(path("/gemini-2.0-flash:generateContent"))
        .and(body_partial_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap();
}

#[tokio::test]
async fn configured_model_is_used_in_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/custom-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let config = AppConfig {
        model_name: Some("custom-model".to_string()),
        ..Default::default()
    };

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &config)
        .await
        .unwrap();
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "quota exceeded", "code": 429 }
        })))
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    let err = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap_err();

    // 429 maps to the rate-limit variant before the body is inspected
    assert!(matches!(err, TranscriptionError::RateLimited));
}

#[tokio::test]
async fn body_level_error_message_is_embedded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "quota exceeded" }
        })))
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    let err = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("quota exceeded"), "got: {}", err);
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("bad-key", server.uri());
    let err = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionError::InvalidApiKey));
}

#[tokio::test]
async fn empty_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let transcriber = GeminiTranscriber::with_base_url("test-key", server.uri());
    let err = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_endpoint_is_request_failure() {
    // Port 1 is never listening
    let transcriber = GeminiTranscriber::with_base_url("test-key", "http://127.0.0.1:1");
    let err = transcriber
        .transcribe("QUJD", &InstructionPrompt::default(), &AppConfig::defaults())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionError::RequestFailed(_)));
}
