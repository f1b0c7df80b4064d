//! LLM Client: the single point of entry for all text-generation calls in SOW Desk.
//!
//! No other module may call the model server directly. Handlers and the SOW
//! generator depend on the `TextGenerator` trait so they can be exercised
//! without network access.
//!
//! Backend: Ollama `/api/generate`, non-streaming.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, Error)]
pub enum LlmError {
    /// The model server could not be reached at all (connection refused, DNS, ...).
    #[error("connection to {endpoint} failed: {message}")]
    Unavailable { endpoint: String, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Capability interface for the external text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submits one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Base URL of the backing service, used in operator-facing error messages.
    fn endpoint(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
    pub eval_count: Option<u32>,
    pub prompt_eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Ollama-backed generator. One shared instance lives in `AppState`.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Http(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify(&self, err: reqwest::Error) -> LlmError {
        if err.is_connect() {
            LlmError::Unavailable {
                endpoint: self.base_url.clone(),
                message: err.to_string(),
            }
        } else {
            LlmError::Http(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}{GENERATE_PATH}", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parse_generate_response(&body)?;
        debug!(
            "LLM call succeeded: prompt_tokens={:?}, output_tokens={:?}",
            parsed.prompt_eval_count, parsed.eval_count
        );
        Ok(parsed.response)
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}

/// Decodes a non-streaming `/api/generate` body, rejecting blank output.
fn parse_generate_response(body: &str) -> Result<GenerateResponse, LlmError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;
    if parsed.response.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_disables_streaming() {
        let body = GenerateRequest {
            model: "llama3",
            prompt: "Draft a SOW",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["prompt"], "Draft a SOW");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_parse_generate_response_reads_text() {
        let body = r##"{"model":"llama3","response":"# Statement of Work","done":true,"eval_count":12}"##;
        let parsed = parse_generate_response(body).unwrap();
        assert_eq!(parsed.response, "# Statement of Work");
        assert_eq!(parsed.eval_count, Some(12));
    }

    #[test]
    fn test_parse_generate_response_rejects_blank_text() {
        let body = r#"{"response":"   ","done":true}"#;
        assert!(matches!(
            parse_generate_response(body),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_parse_generate_response_rejects_garbage() {
        assert!(matches!(
            parse_generate_response("<html>bad gateway</html>"),
            Err(LlmError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_reported_unavailable() {
        // Port 9 (discard) is closed on test hosts; the connect fails immediately.
        let client = OllamaClient::new(
            "http://127.0.0.1:9".to_string(),
            "llama3".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        let err = client.generate("hello").await.unwrap_err();
        assert!(
            matches!(err, LlmError::Unavailable { ref endpoint, .. } if endpoint == "http://127.0.0.1:9"),
            "unexpected error: {err:?}"
        );
    }
}
