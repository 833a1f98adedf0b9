//! Provider adapter tests against a mock HTTP server

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use journal_agent::application::ports::{
    GenerationError, Generator, Transcriber, TranscriptionError,
};
use journal_agent::domain::{AnalysisPrompt, AudioMimeType, FetchedAudio, JournalEntry, SpooledAudio};
use journal_agent::infrastructure::{ClaudeGenerator, WhisperTranscriber};

fn spooled_audio() -> SpooledAudio {
    let audio = FetchedAudio::new(vec![0u8; 32], AudioMimeType::Webm);
    SpooledAudio::spool(&audio).unwrap()
}

fn sample_prompt() -> AnalysisPrompt {
    let entries = vec![JournalEntry::new("2024-01-01", "Felt anxious.")];
    AnalysisPrompt::build(&entries, "I talked about my fears.", "Carl Jung")
}

#[tokio::test]
async fn whisper_uploads_multipart_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("whisper-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "hello world"})))
        .expect(1)
        .mount(&server)
        .await;

    let transcriber =
        WhisperTranscriber::new(reqwest::Client::new(), "test-key").with_base_url(server.uri());

    let text = transcriber.transcribe(&spooled_audio()).await.unwrap();
    assert_eq!(text, "hello world");
}

#[tokio::test]
async fn whisper_unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let transcriber =
        WhisperTranscriber::new(reqwest::Client::new(), "bad-key").with_base_url(server.uri());

    let err = transcriber.transcribe(&spooled_audio()).await.unwrap_err();
    assert!(matches!(err, TranscriptionError::InvalidApiKey));
}

#[tokio::test]
async fn whisper_rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let transcriber =
        WhisperTranscriber::new(reqwest::Client::new(), "key").with_base_url(server.uri());

    let err = transcriber.transcribe(&spooled_audio()).await.unwrap_err();
    assert!(matches!(err, TranscriptionError::RateLimited));
}

#[tokio::test]
async fn whisper_server_error_carries_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error"}
        })))
        .mount(&server)
        .await;

    let transcriber =
        WhisperTranscriber::new(reqwest::Client::new(), "key").with_base_url(server.uri());

    let err = transcriber.transcribe(&spooled_audio()).await.unwrap_err();
    match err {
        TranscriptionError::ApiError(message) => {
            assert!(message.contains("The server had an error"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn claude_sends_fixed_parameters_and_returns_first_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-5-sonnet-20240620",
            "max_tokens": 4096,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "stub output"},
                {"type": "text", "text": "ignored"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        ClaudeGenerator::new(reqwest::Client::new(), "test-key").with_base_url(server.uri());

    let analysis = generator.generate(&sample_prompt()).await.unwrap();
    assert_eq!(analysis, "stub output");
}

#[tokio::test]
async fn claude_sends_prompt_pair() {
    let server = MockServer::start().await;
    let prompt = sample_prompt();
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(json!({
            "system": prompt.system(),
            "messages": [{"role": "user", "content": prompt.user()}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        ClaudeGenerator::new(reqwest::Client::new(), "key").with_base_url(server.uri());

    assert_eq!(generator.generate(&prompt).await.unwrap(), "ok");
}

#[tokio::test]
async fn claude_unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let generator =
        ClaudeGenerator::new(reqwest::Client::new(), "bad-key").with_base_url(server.uri());

    let err = generator.generate(&sample_prompt()).await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidApiKey));
}

#[tokio::test]
async fn claude_error_body_carries_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let generator =
        ClaudeGenerator::new(reqwest::Client::new(), "key").with_base_url(server.uri());

    let err = generator.generate(&sample_prompt()).await.unwrap_err();
    match err {
        GenerationError::ApiError(message) => assert!(message.contains("Overloaded")),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn claude_empty_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
        .mount(&server)
        .await;

    let generator =
        ClaudeGenerator::new(reqwest::Client::new(), "key").with_base_url(server.uri());

    let err = generator.generate(&sample_prompt()).await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}
