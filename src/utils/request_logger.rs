//! LLM 请求日志记录器
//!
//! 为每次补全调用分配请求 ID，并通过 tracing 输出开始、成功、失败三类结构化事件。

use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// 单次补全调用的日志上下文
#[derive(Debug)]
pub struct RequestLog {
    pub request_id: String,
    pub task: String,
    pub model: String,
    started: Instant,
}

impl RequestLog {
    /// 记录请求开始
    pub fn start(
        task: &str,
        model: &str,
        max_tokens: Option<u32>,
        temperature: Option<f64>,
        prompt: &str,
    ) -> Self {
        let request_id = generate_request_id();
        info!(
            request_id = %request_id,
            task = task,
            model = model,
            ?max_tokens,
            ?temperature,
            prompt_chars = prompt.chars().count(),
            prompt_preview = %truncate(prompt, 200),
            "completion started"
        );

        Self {
            request_id,
            task: task.to_string(),
            model: model.to_string(),
            started: Instant::now(),
        }
    }

    /// 记录成功
    pub fn success(self, response: &str) {
        info!(
            request_id = %self.request_id,
            model = %self.model,
            duration_ms = self.started.elapsed().as_millis() as u64,
            response_chars = response.chars().count(),
            "completion succeeded"
        );
    }

    /// 记录错误
    pub fn failure(self, error_message: &str) {
        error!(
            request_id = %self.request_id,
            task = %self.task,
            model = %self.model,
            duration_ms = self.started.elapsed().as_millis() as u64,
            error = %truncate(error_message, 500),
            "completion failed"
        );
    }
}

/// 生成请求 ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// 截断字符串（按字符计）
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-1234567890abcd"), "sk-1...abcd");
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key(""), "");
    }

    #[test]
    fn test_generate_request_id() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_eq!(a.len(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Frações", 4), "Fraç...");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_log_lifecycle() {
        let log = RequestLog::start("lesson_plan", "gpt-4o-mini", Some(700), Some(0.7), "prompt");
        assert_eq!(log.task, "lesson_plan");
        assert_eq!(log.model, "gpt-4o-mini");
        log.success("done");

        let log = RequestLog::start("quiz", "gpt-4o-mini", None, None, "prompt");
        log.failure("boom");
    }
}
