use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};

use super::{HttpResponse, HttpTransport};
use crate::constants::llm::REQUEST_TIMEOUT_SECS;
use crate::error::{AicommitError, Result};

/// `reqwest` 实现的 HTTP transport
///
/// 固定 30 秒总超时；配置了 `proxy_url` 时所有请求走该代理。
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(proxy_url: Option<&str>) -> Result<Self> {
        let user_agent = format!(
            "{}/{} ({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        let mut builder = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        if let Some(proxy_url) = proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                AicommitError::Config(format!("Invalid proxy_url '{}': {}", proxy_url, e))
            })?;
            tracing::debug!("Using proxy: {}", proxy_url);
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            AicommitError::Llm(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, bearer_token: &str, body: String) -> Result<HttpResponse> {
        tracing::debug!("Sending request to: {}", url);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", bearer_token))
            .body(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_send_error)?;

        tracing::debug!("OpenAI API response status: {}", status);
        tracing::debug!("OpenAI API response body: {}", body);

        Ok(HttpResponse { status, body })
    }
}

/// 超时和连接失败给出更具体的错误信息，其余保留原始 reqwest 错误
fn map_send_error(e: reqwest::Error) -> AicommitError {
    if e.is_timeout() {
        AicommitError::Llm(format!(
            "OpenAI API request timeout: {}. The request took longer than {}s.",
            e, REQUEST_TIMEOUT_SECS
        ))
    } else if e.is_connect() {
        AicommitError::Llm(format!(
            "OpenAI API connection failed: {}. Check network connectivity or API endpoint.",
            e
        ))
    } else {
        AicommitError::Network(e)
    }
}
