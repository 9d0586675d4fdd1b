use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AicommitError>;

#[derive(Error, Debug)]
pub enum AicommitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("API key is not set in {}", path.display())]
    MissingApiKey { path: PathBuf },

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("LLM provider error: {0}")]
    Llm(String),

    /// 远端 API 在响应体中返回的 `error.message`
    #[error("Error from OpenAI API: {0}")]
    Api(String),

    #[error("Unable to generate commit message")]
    EmptyCompletion,
}

impl AicommitError {
    /// 获取本地化的错误信息
    pub fn localized_message(&self) -> String {
        match self {
            AicommitError::MissingApiKey { path } => {
                rust_i18n::t!("error.missing_api_key", path = path.display()).to_string()
            }
            AicommitError::EmptyCompletion => rust_i18n::t!("error.empty_completion").to_string(),
            _ => self.to_string(),
        }
    }

    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<String> {
        let hint = match self {
            AicommitError::MissingApiKey { .. } => rust_i18n::t!("suggestion.edit_config"),
            AicommitError::ConfigParse(_) => rust_i18n::t!("suggestion.fix_json"),
            AicommitError::GitCommand(msg) if msg.contains("not found") => {
                rust_i18n::t!("suggestion.install_git")
            }
            AicommitError::Network(_) => rust_i18n::t!("suggestion.network"),
            AicommitError::Llm(msg) if msg.contains("timeout") => {
                rust_i18n::t!("suggestion.timeout")
            }
            AicommitError::Llm(msg) if msg.contains("connection failed") => {
                rust_i18n::t!("suggestion.connect")
            }
            AicommitError::Api(msg) if msg.to_lowercase().contains("api key") => {
                rust_i18n::t!("suggestion.api_key")
            }
            AicommitError::EmptyCompletion => rust_i18n::t!("suggestion.empty_completion"),
            _ => return None,
        };
        Some(hint.to_string())
    }
}
