//! OpenAI chat-completions wire format.

use serde::{Deserialize, Serialize};

use super::utils::preview;
use crate::error::{AicommitError, Result};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// 单条 user 消息的请求
    pub fn user(model: &'a str, prompt: &'a str, max_tokens: u32, temperature: f64) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// 从响应体中取出第一个 completion 的文本
///
/// - 响应体不是 JSON → [`AicommitError::Llm`]
/// - 存在 `error` 对象 → [`AicommitError::Api`]，不再读取 `choices`
/// - 非 2xx 且没有 `error` 对象 → [`AicommitError::Llm`]，即使带有 `choices`
/// - `choices` 为空 → `Ok("")`，由调用方决定如何处理
pub fn parse_completion(status: u16, body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            AicommitError::Llm(format!(
                "Failed to parse OpenAI response: {}. Raw response: {}",
                e,
                preview(body)
            ))
        } else {
            AicommitError::Llm(format!(
                "OpenAI API error ({}): {}",
                status,
                preview(body)
            ))
        }
    })?;

    if let Some(error) = response.error {
        let message = error
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("unknown error (HTTP {})", status));
        return Err(AicommitError::Api(message));
    }

    if !(200..300).contains(&status) {
        return Err(AicommitError::Llm(format!(
            "OpenAI API error ({}): {}",
            status,
            preview(body)
        )));
    }

    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| clean_completion(&text))
        .unwrap_or_default())
}

/// 去掉首尾各一个双引号，再去掉首尾空白
pub fn clean_completion(text: &str) -> String {
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.trim().to_string()
}
