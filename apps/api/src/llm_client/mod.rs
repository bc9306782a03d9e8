/// LLM Client — the single point of entry for all chat-completion calls in Pathwise.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// Features go through `Gateway`, which is either `Available` with a client or
/// `Unavailable` with the reason, and take their offline branch on any failure.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

const MAX_TOKENS: u32 = 2048;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a chat-completion conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice, if it carries any non-blank content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The seam every feature talks to. `LlmClient` is the production implementation.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint (Groq by default).
/// Retries on 429, 5xx and connection errors with exponential backoff.
/// Timeouts are not retried, so one call is bounded by the configured timeout.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }

    /// Makes a raw call to the provider, returning the full response object.
    pub async fn call(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
    ) -> Result<CompletionResponse, LlmError> {
        let request_body = CompletionRequest {
            model,
            messages,
            temperature,
            max_tokens: MAX_TOKENS,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                // Timeouts are final: a hung provider costs one timeout, not three.
                Err(e) if e.is_timeout() => {
                    warn!("LLM call timed out, not retrying: {e}");
                    return Err(LlmError::Http(e));
                }
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ProviderError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: CompletionResponse = response.json().await?;

            if let Some(usage) = &completion.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return Ok(completion);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(messages, model, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gateway
// ────────────────────────────────────────────────────────────────────────────

/// Why no client could be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnavailableReason {
    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("LLM client could not be initialised: {0}")]
    ClientInit(String),
}

/// A failed attempt to get text out of the gateway.
/// Both variants route the caller to its offline generator.
#[derive(Debug, Error)]
pub enum GatewayFailure {
    #[error("LLM unavailable: {0}")]
    Unavailable(UnavailableReason),

    #[error("LLM request failed: {0}")]
    CallFailed(#[from] LlmError),
}

/// A ready client plus the model it should be asked for.
#[derive(Clone)]
pub struct GatewayHandle {
    client: Arc<dyn ChatCompletion>,
    model: String,
}

impl GatewayHandle {
    pub fn new(client: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Availability of the LLM, decided once at startup.
#[derive(Clone)]
pub enum Gateway {
    Available(GatewayHandle),
    Unavailable(UnavailableReason),
}

impl Gateway {
    pub fn from_config(config: &Config) -> Self {
        let Some(api_key) = config.groq_api_key.clone() else {
            return Gateway::Unavailable(UnavailableReason::MissingApiKey);
        };

        match LlmClient::new(
            api_key,
            config.llm_api_url.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        ) {
            Ok(client) => {
                Gateway::Available(GatewayHandle::new(Arc::new(client), &config.llm_model))
            }
            Err(e) => Gateway::Unavailable(UnavailableReason::ClientInit(e.to_string())),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Gateway::Available(_))
    }

    /// Sends the conversation to the configured model.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, GatewayFailure> {
        match self {
            Gateway::Available(handle) => Ok(handle
                .client
                .complete(messages, &handle.model, temperature)
                .await?),
            Gateway::Unavailable(reason) => Err(GatewayFailure::Unavailable(reason.clone())),
        }
    }

    /// Convenience for the common single-turn case: one system and one user message.
    pub async fn ask(
        &self,
        system: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, GatewayFailure> {
        let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
        self.chat(&messages, temperature).await
    }
}

#[cfg(test)]
pub mod testing {
    //! Stub gateways for exercising live and failed paths without a network.

    use super::*;
    use std::sync::Mutex;

    /// Replies with a fixed text, or fails every call when `reply` is `None`.
    /// Records every conversation it receives.
    pub struct StubCompletion {
        reply: Option<String>,
        pub seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl StubCompletion {
        pub fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatCompletion for StubCompletion {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            _model: &str,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 401,
                    message: "invalid api key".to_string(),
                }),
            }
        }
    }

    pub fn live_gateway(stub: Arc<StubCompletion>) -> Gateway {
        Gateway::Available(GatewayHandle::new(stub, "test-model"))
    }

    pub fn offline_gateway() -> Gateway {
        Gateway::Unavailable(UnavailableReason::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_missing_api_key_is_unavailable() {
        let config = Config::for_tests();
        let gateway = Gateway::from_config(&config);
        assert!(!gateway.is_available());
        assert!(matches!(
            gateway,
            Gateway::Unavailable(UnavailableReason::MissingApiKey)
        ));
    }

    #[test]
    fn test_api_key_makes_gateway_available() {
        let config = Config {
            groq_api_key: Some("gsk_test".to_string()),
            ..Config::for_tests()
        };
        assert!(Gateway::from_config(&config).is_available());
    }

    #[tokio::test]
    async fn test_unavailable_gateway_reports_reason() {
        let err = offline_gateway().ask("sys", "hi", 0.4).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayFailure::Unavailable(UnavailableReason::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_failed_call_is_distinct_from_unavailable() {
        let err = live_gateway(StubCompletion::failing())
            .ask("sys", "hi", 0.4)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayFailure::CallFailed(LlmError::Api { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_ask_sends_system_then_user() {
        let stub = StubCompletion::replying("ok");
        let text = live_gateway(stub.clone())
            .ask("be helpful", "hello", 0.4)
            .await
            .unwrap();
        assert_eq!(text, "ok");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            vec![ChatMessage::system("be helpful"), ChatMessage::user("hello")]
        );
    }

    #[tokio::test]
    async fn test_timeout_is_not_retried() {
        // Accepts connections and never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = LlmClient::new(
            "gsk_test".to_string(),
            format!("http://{addr}/v1/chat/completions"),
            Duration::from_millis(200),
        )
        .unwrap();

        let started = std::time::Instant::now();
        let err = client
            .complete(&[ChatMessage::user("hi")], "test-model", 0.4)
            .await
            .unwrap_err();

        assert!(matches!(&err, LlmError::Http(e) if e.is_timeout()), "got {err:?}");
        // a retry would add at least a 1s backoff
        assert!(started.elapsed() < Duration::from_millis(900));
    }

    #[test]
    fn test_completion_text_skips_blank_content() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "   "}}]}"#,
        )
        .unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_completion_text_reads_first_choice() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{
                "choices": [{"message": {"role": "assistant", "content": "Hello"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("Hello"));
        assert_eq!(response.usage.unwrap().completion_tokens, 2);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
