use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::error;

use crate::application::CompletionClient;
use crate::domain::{
    ChatMessage, Completion, CompletionCandidate, CompletionParams, GenerationError,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Total-request timeout. The upstream API defines no bound of its own, so
/// the adapter enforces this default to keep callers from hanging on a stuck
/// connection.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI chat-completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: Option<ApiChoiceMessage>,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI chat-completions API (and compatible endpoints).
///
/// Implements [`CompletionClient`] so the generation use case stays decoupled
/// from transport and serialization details. Construct once at startup and
/// share via `Arc`; the underlying `reqwest::Client` pools connections and is
/// never mutated after construction.
///
/// **API key**: read once from `OPENAI_API_KEY` at construction time via
/// [`from_env`](Self::from_env); absence fails there, never per call.
///
/// **Base URL**: defaults to `https://api.openai.com`. Override with
/// `OPENAI_BASE_URL` to target any OpenAI-compatible server — e.g. a locally
/// running inference server.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl OpenAiClient {
    /// Create a new client with an explicit API key and endpoint base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Construct from environment variables:
    /// - `OPENAI_API_KEY`  — required; missing key fails fast at startup
    /// - `OPENAI_BASE_URL` — optional; defaults to `https://api.openai.com`
    pub fn from_env() -> Result<Self, GenerationError> {
        let key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            let err = GenerationError::configuration("OPENAI_API_KEY is not set");
            error!("OpenAiClient: {err}");
            err
        })?;
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, base))
    }

    /// The model to request when the caller specifies none: `OPENAI_MODEL`
    /// from the environment, falling back to `gpt-3.5-turbo`.
    pub fn default_model() -> String {
        std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
    }
}

/// Map a non-success HTTP status to its distinct failure kind.
fn classify_status(status: StatusCode, body: &str) -> GenerationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GenerationError::authentication(format!("service returned {status}: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            GenerationError::rate_limit(format!("service returned {status}: {body}"))
        }
        s if s.is_server_error() => {
            GenerationError::service_unavailable(format!("service returned {status}: {body}"))
        }
        _ => GenerationError::unknown(format!("service returned {status}: {body}")),
    }
}

/// Map a transport-level `reqwest` failure to its distinct failure kind.
fn classify_transport(e: &reqwest::Error, url: &str) -> GenerationError {
    if e.is_timeout() {
        GenerationError::timeout(format!("request to {url} exceeded {DEFAULT_TIMEOUT:?}: {e}"))
    } else if e.is_connect() {
        GenerationError::service_unavailable(format!("could not connect to {url}: {e}"))
    } else {
        GenerationError::unknown(format!("request to {url} failed: {e}"))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<Completion, GenerationError> {
        let request = ApiRequest {
            model: params.model(),
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
            temperature: params.temperature(),
            max_tokens: params.max_tokens(),
        };

        let response = match self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                let err = classify_transport(&e, &self.url);
                error!("OpenAiClient: {err}");
                return Err(err);
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = classify_status(status, &body);
            error!("OpenAiClient: {err}");
            return Err(err);
        }

        let api_response: ApiResponse = match response.json().await {
            Ok(r) => r,
            Err(e) => {
                let err = if e.is_timeout() {
                    GenerationError::timeout(format!("response body read timed out: {e}"))
                } else {
                    GenerationError::malformed_response(format!("undecodable response body: {e}"))
                };
                error!("OpenAiClient: {err}");
                return Err(err);
            }
        };

        let candidates = api_response
            .choices
            .into_iter()
            .map(|choice| CompletionCandidate::new(choice.message.and_then(|m| m.content)))
            .collect();
        Ok(Completion::new(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_status_distinguishes_failure_kinds() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "bad key"),
            GenerationError::Authentication(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, ""),
            GenerationError::Authentication(_)
        ));
        assert!(classify_status(StatusCode::TOO_MANY_REQUESTS, "").is_rate_limit());
        assert!(matches!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            GenerationError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            GenerationError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, ""),
            GenerationError::Unknown(_)
        ));
    }

    #[test]
    fn classify_status_keeps_diagnostic_context() {
        let err = classify_status(StatusCode::UNAUTHORIZED, "invalid api key");
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid api key"));
    }

    #[test]
    fn response_parses_a_normal_reply() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(
            parsed.choices[0].message.as_ref().unwrap().content.as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn response_tolerates_missing_choices_and_content() {
        let parsed: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());

        let raw = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.as_ref().unwrap().content.is_none());
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = OpenAiClient::new("key", "http://localhost:1234/");
        assert_eq!(client.url, "http://localhost:1234/v1/chat/completions");
    }
}
