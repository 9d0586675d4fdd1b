//! Commit message generation over an OpenAI-compatible chat-completions API.
//!
//! The HTTP layer sits behind [`HttpTransport`] so the generator can be
//! exercised with a mock transport or a local mock server.

/// OpenAI request/response wire types.
pub mod openai;
/// Prompt construction.
pub mod prompt;
/// `reqwest`-backed transport.
pub mod transport;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use openai::{ChatRequest, parse_completion};
use utils::mask_api_key;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use transport::ReqwestTransport;

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP interface used by [`CommitMessageGenerator`].
///
/// Implementations POST `body` as JSON with an `Authorization: Bearer` header
/// and return the response whatever its status; only transport failures
/// (timeout, connection refused, ...) are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, bearer_token: &str, body: String)
    -> Result<HttpResponse>;
}

/// Builds the prompt, sends one request and extracts the completion text.
///
/// One blocking request per call: no retry, no streaming.
pub struct CommitMessageGenerator<T> {
    transport: T,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl<T: HttpTransport> CommitMessageGenerator<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            transport,
            endpoint: config.openai_endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens_u32(),
            temperature: config.temperature,
        }
    }

    /// Generates a commit message for `diff` written in `lang`.
    ///
    /// Returns an empty string when the API answered with no choices; the
    /// caller decides whether that is fatal.
    pub async fn generate(&self, diff: &str, lang: &str, notes: &str) -> Result<String> {
        let prompt = prompt::build_commit_prompt(diff, lang, notes);
        let request = ChatRequest::user(&self.model, &prompt, self.max_tokens, self.temperature);
        let body = serde_json::to_string(&request)?;

        tracing::debug!(
            "OpenAI API request: model={}, temperature={}, max_tokens={}, api_key={}, prompt_len={}",
            self.model,
            self.temperature,
            self.max_tokens,
            mask_api_key(&self.api_key),
            prompt.len()
        );

        let response = self
            .transport
            .post_json(&self.endpoint, &self.api_key, body)
            .await?;

        let message = parse_completion(response.status, &response.body)?;
        tracing::debug!("Generated commit message: {}", message);
        Ok(message)
    }
}
