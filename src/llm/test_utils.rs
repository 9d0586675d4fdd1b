//! Test utilities shared by unit and integration tests.

use crate::config::Config;

/// 在测试中安装 rustls crypto provider
///
/// reqwest 0.13 + rustls-no-provider 需要手动安装 crypto provider，
/// 生产代码在 main.rs 中完成，测试需要单独调用。
/// 多次调用是安全的（install_default 失败时忽略即可）。
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Create a loaded `Config` pointing at a mock server
///
/// Uses `sk-test` as API key and the defaults for everything else.
pub fn test_config(endpoint: &str) -> Config {
    Config {
        openai_endpoint: endpoint.to_string(),
        api_key: "sk-test".to_string(),
        ..Config::default()
    }
}
