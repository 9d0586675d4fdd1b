//! Configuration file structure.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::llm::{
    DEFAULT_ENDPOINT, DEFAULT_LANG, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::error::{AicommitError, Result};

/// Application configuration, stored as JSON in `~/.aicommit/config.json`.
///
/// Every field is optional in the document: missing or `null` strings and
/// numbers deserialize as empty/zero and are replaced by [`Config::with_fallbacks`].
///
/// # Example
/// ```json
/// {
///   "openai_endpoint": "https://api.openai.com/v1/chat/completions",
///   "api_key": "sk-...",
///   "default_lang": "en",
///   "proxy_url": "socks5://127.0.0.1:1080",
///   "model": "gpt-4o",
///   "max_tokens": 500,
///   "temperature": 0.7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Full chat-completions URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub openai_endpoint: String,

    /// Bearer token sent with every request. Must not be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_key: String,

    /// Language of the generated commit message (e.g. `en`, `zh`, `fr`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_lang: String,

    /// Optional HTTP/HTTPS/SOCKS proxy for the API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,

    /// Values `<= 0` fall back to the default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_tokens: i64,

    /// Values `<= 0` fall back to the default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature: f64,
}

/// `null` 与字段缺失同样处理
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Config {
    /// 首次运行时写入磁盘的默认配置（API key 为空）
    fn default() -> Self {
        Self {
            openai_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            default_lang: DEFAULT_LANG.to_string(),
            proxy_url: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Config {
    /// 检查 API key 是否已设置
    ///
    /// `path` 仅用于错误信息，提示用户去哪里编辑。
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AicommitError::MissingApiKey {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// 为空字段和非正数字段填充默认值（不会回写文件）
    pub fn with_fallbacks(mut self) -> Self {
        if self.openai_endpoint.trim().is_empty() {
            self.openai_endpoint = DEFAULT_ENDPOINT.to_string();
        }
        if self.default_lang.trim().is_empty() {
            self.default_lang = DEFAULT_LANG.to_string();
        }
        if self.model.trim().is_empty() {
            self.model = DEFAULT_MODEL.to_string();
        }
        if self.max_tokens <= 0 {
            self.max_tokens = DEFAULT_MAX_TOKENS;
        }
        if self.temperature <= 0.0 || self.temperature.is_nan() {
            self.temperature = DEFAULT_TEMPERATURE;
        }
        self.proxy_url = self
            .proxy_url
            .take()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }

    /// Applies a per-invocation language override. Empty overrides are ignored.
    pub fn with_language(mut self, lang: Option<&str>) -> Self {
        if let Some(lang) = lang.map(str::trim).filter(|l| !l.is_empty()) {
            self.default_lang = lang.to_string();
        }
        self
    }

    /// `max_tokens` as sent on the wire.
    pub fn max_tokens_u32(&self) -> u32 {
        u32::try_from(self.max_tokens).unwrap_or(u32::MAX)
    }
}
