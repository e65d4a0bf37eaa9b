//! Prompt 构建服务
//!
//! 将请求字段套入固定模板，生成发送给 LLM 的提示词。
//! 字段值原样拼接，不做转义或截断。

use crate::llm::ChatMessage;
use crate::models::{AssistantRequest, ExamRequest, LessonPlanRequest, QuizRequest};

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 教案提示词
    pub fn lesson_plan_prompt(&self, req: &LessonPlanRequest) -> String {
        let mut prompt = format!(
            "Create a lesson plan for the topic '{}', target audience '{}', with a duration of {}. ",
            req.topic,
            req.audience(),
            req.duration()
        );
        if let Some(details) = req.extra_details() {
            prompt.push_str(&format!("Additional details: {}.", details));
        }
        prompt.push_str("\nPlease write the plan in a clear and organized way.");
        prompt
    }

    /// 试卷提示词
    pub fn exam_prompt(&self, req: &ExamRequest) -> String {
        format!(
            "Create an exam with {} questions for the subject '{}' at {} level. \
             Include varied and clear questions.",
            req.question_count(),
            req.subject,
            req.level()
        )
    }

    /// 助手提示词，有上下文时置于问题之前
    pub fn assistant_prompt(&self, req: &AssistantRequest) -> String {
        let prompt = format!(
            "Answer the question clearly and objectively:\nQuestion: {}",
            req.question
        );
        match req.context() {
            Some(context) => format!("Context: {}\n{}", context, prompt),
            None => prompt,
        }
    }

    /// 测验提示词
    pub fn quiz_prompt(&self, req: &QuizRequest) -> String {
        format!(
            "Create a fun, educational quiz with {} questions about the topic '{}'. \
             Provide the questions with multiple-choice options and highlight the correct answer.",
            req.question_count(),
            req.topic
        )
    }

    /// 构建单条用户消息
    pub fn build_messages(&self, prompt: impl Into<String>) -> Vec<ChatMessage> {
        vec![ChatMessage::user(prompt)]
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
