use std::fmt;
use std::time::Duration;

use cloner_core::GeneratedProject;
use cloner_logging::{cloner_debug, cloner_info, cloner_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::prompt::{GenerationRequest, SYSTEM_INSTRUCTION};
use crate::schema::{parse_project, response_schema};
use crate::{CloneError, FailureKind};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables consulted for the credential, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone)]
pub struct GeneratorSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_response_bytes: 8 * 1024 * 1024,
        }
    }
}

impl GeneratorSettings {
    /// Defaults plus the credential from the environment, if any.
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_response_bytes", &self.max_response_bytes)
            .finish()
    }
}

/// Turns a page description into a project. One request per call, no retries.
#[async_trait::async_trait]
pub trait ProjectGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedProject, CloneError>;
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    settings: GeneratorSettings,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, CloneError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CloneError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, CloneError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ProjectGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedProject, CloneError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            CloneError::new(
                FailureKind::MissingCredential,
                "No API key configured. Set GEMINI_API_KEY and try again.",
            )
        })?;

        let body = request_body(request).to_string();
        cloner_info!(
            "Requesting project from model={} url={} html_chars={} style_chars={}",
            self.settings.model,
            request.url,
            request.html_snippet.chars().count(),
            request.computed_styles.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", api_key)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CloneError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Model request failed: {status}"),
            ));
        }

        let bytes = self.read_body(response).await?;
        cloner_debug!("Model response received bytes={}", bytes.len());

        let text = candidate_text(&bytes).map_err(|message| {
            cloner_warn!("Unusable model response envelope: {}", message);
            CloneError::new(FailureKind::InvalidFormat, message)
        })?;

        let project = parse_project(&text).map_err(|err| {
            cloner_warn!("Failed to parse model response: {}", err);
            CloneError::new(FailureKind::InvalidFormat, err.to_string())
        })?;
        cloner_info!("Model returned {} file(s)", project.len());
        Ok(project)
    }
}

fn request_body(request: &GenerationRequest) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt() }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Text of the first candidate, with all of its parts joined.
fn candidate_text(bytes: &[u8]) -> Result<String, String> {
    let envelope: GenerateContentResponse =
        serde_json::from_slice(bytes).map_err(|err| err.to_string())?;
    let parts = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.trim().is_empty() {
        return Err("response carried no candidate text".to_string());
    }
    Ok(text)
}

fn too_large(max_bytes: u64, actual: u64) -> CloneError {
    CloneError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "Model response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> CloneError {
    if err.is_timeout() {
        return CloneError::new(FailureKind::Timeout, err.to_string());
    }
    CloneError::new(FailureKind::Network, err.to_string())
}
