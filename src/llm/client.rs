//! LLM 客户端

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::info;

use super::openai::complete_openai;
use super::types::{ChatMessage, ChatOptions, LlmError};

/// OpenAI 兼容的 LLM 客户端
///
/// 凭据在创建时注入，之后只读。
pub struct LlmClient {
    client: Client,
    api_key: Secret<String>,
    base_url: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: Secret<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        if api_key.expose_secret().is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 单次补全请求，返回第一个候选的原始文本
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        info!(
            "LLM request: model={}, max_tokens={:?}, temperature={:?}",
            model, options.max_tokens, options.temperature
        );

        complete_openai(
            &self.client,
            self.api_key.expose_secret(),
            &self.base_url,
            &messages,
            model,
            &options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = LlmClient::new(
            Secret::new(String::new()),
            "https://api.openai.com",
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(LlmError::ConfigError(_))));
    }

    #[test]
    fn test_new_client() {
        let client = LlmClient::new(
            Secret::new("sk-test".to_string()),
            "https://api.openai.com",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.openai.com");
    }
}
