//! Text-generation capability used by the assistant panel.
//!
//! [`TextGenerator`] is the narrow seam the app depends on; [`GeminiClient`]
//! implements it against the Gemini `generateContent` REST endpoint.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::infra::config::AssistantConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Boxed future returned by [`TextGenerator::generate`].
pub type GenerateFuture = Pin<Box<dyn Future<Output = Result<String, EndpointError>> + Send>>;

/// Failures of one text-generation request.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("no API key configured for the text-generation endpoint")]
    MissingCredential,
    #[error("invalid text-generation endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("text-generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("text-generation endpoint returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("text-generation response was malformed: {0}")]
    Malformed(String),
    #[error("text-generation response contained no text")]
    EmptyResponse,
    #[error("text-generation request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),
}

/// Generates reply text for a prompt under a fixed system context.
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    /// Requests one reply for `prompt`, with `context` as the system
    /// instruction.
    fn generate(&self, prompt: String, context: String) -> GenerateFuture;
}

/// Production [`TextGenerator`] backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: AssistantConfig,
}

impl GeminiClient {
    /// Creates a client; the credential is captured from `config` once.
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Returns the `generateContent` URL for the configured model.
    ///
    /// # Errors
    /// Returns an error when the configured base URL cannot be parsed.
    pub fn endpoint_url(&self) -> Result<Url, EndpointError> {
        let base_url = self.config.base_url.trim_end_matches('/');
        let url = Url::parse(&format!(
            "{base_url}/{model}:generateContent",
            model = self.config.model
        ))?;

        Ok(url)
    }

    async fn send_request(
        client: reqwest::Client,
        url: Url,
        api_key: String,
        body: GenerateContentRequest,
    ) -> Result<String, EndpointError> {
        let response = client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());

            return Err(map_http_error(status, &body_text));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|error| EndpointError::Malformed(error.to_string()))?;

        extract_text_response(parsed)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: String, context: String) -> GenerateFuture {
        let Some(api_key) = self.config.api_key.clone() else {
            return Box::pin(async { Err(EndpointError::MissingCredential) });
        };
        let url = match self.endpoint_url() {
            Ok(url) => url,
            Err(error) => return Box::pin(async move { Err(error) }),
        };
        let body = GenerateContentRequest::new(prompt, context, self.config.temperature);
        let client = self.client.clone();

        Box::pin(Self::send_request(client, url, api_key, body))
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: String, context: String, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: context }],
            },
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Joins the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String, EndpointError> {
    let text = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(EndpointError::EmptyResponse);
    }

    Ok(text)
}

fn map_http_error(status: StatusCode, body: &str) -> EndpointError {
    let message = serde_json::from_str::<ErrorWrapper>(body).map_or_else(
        |_| body.to_string(),
        |wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let message = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                message
            } else {
                format!("{status_text}: {message}")
            }
        },
    );

    EndpointError::Status {
        status: status.as_u16(),
        message,
    }
}
