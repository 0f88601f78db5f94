use std::time::Duration;

use cloner_engine::{
    CloneError, FailureKind, GeminiGenerator, GenerationRequest, GeneratorSettings,
    ProjectGenerator, INVALID_FORMAT_MESSAGE, MAX_HTML_CHARS,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn settings_for(server: &MockServer) -> GeneratorSettings {
    GeneratorSettings {
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        base_url: server.uri(),
        ..GeneratorSettings::default()
    }
}

/// Wraps `text` the way the model API returns generated content.
fn envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn request() -> GenerationRequest {
    GenerationRequest::new(
        "<h1>Hello</h1>",
        r##"{"h1":{"color":"#333"}}"##,
        "https://example.com",
    )
}

async fn generate_with(server: &MockServer) -> Result<cloner_core::GeneratedProject, CloneError> {
    let generator = GeminiGenerator::new(settings_for(server)).expect("client");
    generator.generate(&request()).await
}

#[tokio::test]
async fn generator_maps_files_array_to_project() {
    let server = MockServer::start().await;
    let answer = json!({
        "files": [
            { "path": "components/Header.tsx", "content": "export function Header() {}" },
            { "path": "app/page.tsx", "content": "export default function Page() {}" }
        ]
    });
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&answer.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let project = generate_with(&server).await.expect("project");
    assert_eq!(project.len(), 2);
    assert_eq!(project.primary_path(), Some("components/Header.tsx"));
    assert_eq!(
        project.content("app/page.tsx"),
        Some("export default function Page() {}")
    );
}

#[tokio::test]
async fn duplicate_paths_resolve_to_last_entry() {
    let server = MockServer::start().await;
    let answer = json!({
        "files": [
            { "path": "app/page.tsx", "content": "A" },
            { "path": "app/page.tsx", "content": "B" }
        ]
    });
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&answer.to_string())))
        .mount(&server)
        .await;

    let project = generate_with(&server).await.expect("project");
    assert_eq!(project.len(), 1);
    assert_eq!(project.content("app/page.tsx"), Some("B"));
}

#[tokio::test]
async fn answer_without_files_array_is_invalid_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(r#"{"components": []}"#)),
        )
        .mount(&server)
        .await;

    let err = generate_with(&server).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidFormat);
    assert_eq!(err.user_message(), INVALID_FORMAT_MESSAGE);
}

#[tokio::test]
async fn non_json_answer_is_invalid_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("Sure! Here is your project:")),
        )
        .mount(&server)
        .await;

    let err = generate_with(&server).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidFormat);
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = generate_with(&server).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(429));
    assert!(err.user_message().contains("429"));
}

#[tokio::test]
async fn slow_model_times_out_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(envelope(r#"{"files": []}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = GeneratorSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let generator = GeminiGenerator::new(settings).expect("client");
    let err = generator.generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&"x".repeat(256))))
        .mount(&server)
        .await;

    let settings = GeneratorSettings {
        max_response_bytes: 64,
        ..settings_for(&server)
    };
    let generator = GeminiGenerator::new(settings).expect("client");
    let err = generator.generate(&request()).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 64, .. }
    ));
}

#[tokio::test]
async fn missing_credential_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let settings = GeneratorSettings {
        api_key: None,
        ..settings_for(&server)
    };
    let generator = GeminiGenerator::new(settings).expect("client");
    let err = generator.generate(&request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingCredential);
}

#[tokio::test]
async fn request_carries_truncated_html_and_json_mode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(r#"{"files": []}"#)))
        .mount(&server)
        .await;

    let long_html = format!("{}TAIL", "a".repeat(MAX_HTML_CHARS));
    let request = GenerationRequest::new(&long_html, "{}", "https://example.com/landing");
    let generator = GeminiGenerator::new(settings_for(&server)).expect("client");
    let project = generator.generate(&request).await.expect("empty project");
    assert!(project.is_empty());

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body: Value = serde_json::from_slice(&received[0].body).expect("json body");
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("URL: https://example.com/landing"));
    assert!(prompt.contains(&"a".repeat(MAX_HTML_CHARS)));
    assert!(!prompt.contains("TAIL"));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}
