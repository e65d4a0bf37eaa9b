//! LLM 服务封装
//!
//! 封装 LlmClient：按端点的固定参数发起补全，并记录请求日志。

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::llm::{ChatMessage, ChatOptions, LlmClient, LlmError};
use crate::utils::RequestLog;
use std::time::Duration;

/// 每个端点固定的补全参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionProfile {
    /// 日志中使用的任务名
    pub name: &'static str,
    pub model: &'static str,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl CompletionProfile {
    pub const LESSON_PLAN: Self = Self {
        name: "lesson_plan",
        model: "gpt-4o-mini",
        max_tokens: 700,
        temperature: 0.7,
    };

    pub const EXAM: Self = Self {
        name: "exam",
        model: "gpt-4o-mini",
        max_tokens: 900,
        temperature: 0.7,
    };

    pub const ASSISTANT: Self = Self {
        name: "assistant",
        model: "gpt-4o-mini",
        max_tokens: 500,
        temperature: 0.6,
    };

    pub const QUIZ: Self = Self {
        name: "quiz",
        model: "gpt-4o-mini",
        max_tokens: 900,
        temperature: 0.7,
    };

    pub fn options(&self) -> ChatOptions {
        ChatOptions {
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        }
    }
}

/// 补全提供方
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// 发起一次补全，返回第一个候选的文本（未裁剪）
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        profile: &CompletionProfile,
    ) -> Result<String, LlmError>;
}

/// LLM 服务
pub struct LlmService {
    client: LlmClient,
}

impl LlmService {
    /// 使用已构建的客户端创建服务
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// 根据应用配置创建服务
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let client = LlmClient::new(
            config.api_key.clone(),
            &config.base_url,
            Duration::from_secs(config.llm_timeout_secs),
        )?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl CompletionProvider for LlmService {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        profile: &CompletionProfile,
    ) -> Result<String, LlmError> {
        let options = profile.options();
        let prompt = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        let log = RequestLog::start(
            profile.name,
            profile.model,
            options.max_tokens,
            options.temperature,
            prompt,
        );

        match self.client.complete(messages, profile.model, options).await {
            Ok(text) => {
                log.success(&text);
                Ok(text)
            }
            Err(e) => {
                log.failure(&e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[test]
    fn test_profiles() {
        assert_eq!(CompletionProfile::LESSON_PLAN.max_tokens, 700);
        assert_eq!(CompletionProfile::EXAM.max_tokens, 900);
        assert_eq!(CompletionProfile::ASSISTANT.max_tokens, 500);
        assert!((CompletionProfile::ASSISTANT.temperature - 0.6).abs() < f64::EPSILON);
        assert_eq!(CompletionProfile::QUIZ.max_tokens, 900);

        for profile in [
            CompletionProfile::LESSON_PLAN,
            CompletionProfile::EXAM,
            CompletionProfile::ASSISTANT,
            CompletionProfile::QUIZ,
        ] {
            assert_eq!(profile.model, "gpt-4o-mini");
        }
    }

    #[test]
    fn test_profile_options() {
        let options = CompletionProfile::QUIZ.options();
        assert_eq!(options.max_tokens, Some(900));
        assert_eq!(options.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_unreachable_provider_reports_error() {
        let client = LlmClient::new(
            Secret::new("sk-test".to_string()),
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        )
        .unwrap();
        let service = LlmService::new(client);

        let result = service
            .complete(vec![ChatMessage::user("hi")], &CompletionProfile::QUIZ)
            .await;
        assert!(matches!(result, Err(LlmError::HttpError(_))));
    }
}
