//! 全局常量定义

/// 配置文件相关常量
pub mod config {
    /// 用户主目录下的配置目录名
    pub const CONFIG_DIR_NAME: &str = ".aicommit";

    /// 配置文件名
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

/// LLM 相关常量
pub mod llm {
    /// 默认 chat completions 端点
    pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

    /// 默认 commit message 语言
    pub const DEFAULT_LANG: &str = "en";

    /// 默认模型
    pub const DEFAULT_MODEL: &str = "gpt-4o";

    /// 默认 max_tokens
    pub const DEFAULT_MAX_TOKENS: i64 = 500;

    /// 默认 temperature
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;

    /// HTTP 请求超时（秒）
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// UI 相关常量
pub mod ui {
    /// 错误预览最大长度
    pub const ERROR_PREVIEW_LENGTH: usize = 500;
}
