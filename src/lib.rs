//! # aicommit
//!
//! 暂存全部变更，把 diff 交给 OpenAI 兼容的 chat-completions API 生成
//! commit message，然后直接提交。
//!
//! ## 流程
//! ```text
//! 参数解析 → 加载配置 → git add . → git status → git diff + git diff --cached
//!          → 生成 message → git commit -m <message>
//! ```
//! diff 为空时不会调用 API，直接以 0 退出。
//!
//! ## 作为库使用
//! ```no_run
//! use aicommit::config::{ConfigStatus, load_or_init};
//! use aicommit::git::{Git, GitCli};
//! use aicommit::llm::{CommitMessageGenerator, ReqwestTransport};
//!
//! # async fn example() -> aicommit::error::Result<()> {
//! let ConfigStatus::Ready(config) = load_or_init()? else {
//!     return Ok(());
//! };
//! let git = Git::new(GitCli::new()?);
//! let diff = git.combined_diff()?;
//!
//! let transport = ReqwestTransport::new(config.proxy_url.as_deref())?;
//! let generator = CommitMessageGenerator::new(&config, transport);
//! let message = generator.generate(&diff, &config.default_lang, "").await?;
//! println!("Generated: {}", message);
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`config`] - 配置文件（`~/.aicommit/config.json`）
//! - [`git`] - git 命令封装
//! - [`llm`] - prompt、请求和响应解析
//! - [`commands`] - 完整流程
//! - [`cli`] - 命令行参数
//! - [`error`] - 统一错误类型
//! - [`ui`] - 终端输出
//!
//! ## 配置
//! ```json
//! {
//!   "openai_endpoint": "https://api.openai.com/v1/chat/completions",
//!   "api_key": "sk-...",
//!   "default_lang": "en",
//!   "model": "gpt-4o",
//!   "max_tokens": 500,
//!   "temperature": 0.7
//! }
//! ```

#[macro_use]
extern crate rust_i18n;

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;

// Initialize i18n for library modules
i18n!("locales", fallback = "en");
