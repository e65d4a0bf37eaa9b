//! REST API 请求/响应模型
//!
//! 请求字段同时接受旧版接口的葡萄牙语字段名（如 `tema`、`disciplina`）。
//! 可选字段缺省或为 `null` 时取默认值。

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 默认受众
pub const DEFAULT_AUDIENCE: &str = "Students";
/// 默认课时
pub const DEFAULT_DURATION: &str = "45 minutes";
/// 默认难度
pub const DEFAULT_LEVEL: &str = "Medium";
/// 试卷默认题目数
pub const DEFAULT_EXAM_QUESTIONS: i64 = 10;
/// 测验默认题目数
pub const DEFAULT_QUIZ_QUESTIONS: i64 = 5;

/// 教案生成请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LessonPlanRequest {
    #[serde(alias = "tema")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub topic: String,
    #[serde(default, alias = "publico_alvo")]
    pub audience: Option<String>,
    #[serde(default, alias = "duracao")]
    pub duration: Option<String>,
    #[serde(default, alias = "detalhes")]
    pub extra_details: Option<String>,
}

impl LessonPlanRequest {
    pub fn audience(&self) -> &str {
        self.audience.as_deref().unwrap_or(DEFAULT_AUDIENCE)
    }

    pub fn duration(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }

    /// 非空的附加说明
    pub fn extra_details(&self) -> Option<&str> {
        self.extra_details.as_deref().filter(|d| !d.is_empty())
    }
}

/// 试卷生成请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamRequest {
    #[serde(alias = "disciplina")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub subject: String,
    #[serde(default, alias = "nivel")]
    pub level: Option<String>,
    #[serde(default, alias = "quantidade_questoes")]
    pub question_count: Option<i64>,
}

impl ExamRequest {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }

    pub fn question_count(&self) -> i64 {
        self.question_count.unwrap_or(DEFAULT_EXAM_QUESTIONS)
    }
}

/// 教学助手提问请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssistantRequest {
    #[serde(alias = "pergunta")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub question: String,
    #[serde(default, alias = "contexto")]
    pub context: Option<String>,
}

impl AssistantRequest {
    /// 非空的上下文
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !c.is_empty())
    }
}

/// 测验生成请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[serde(alias = "tema")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub topic: String,
    #[serde(default, alias = "numero_perguntas")]
    pub question_count: Option<i64>,
}

impl QuizRequest {
    pub fn question_count(&self) -> i64 {
        self.question_count.unwrap_or(DEFAULT_QUIZ_QUESTIONS)
    }
}

/// 教案响应
#[derive(Debug, Serialize)]
pub struct LessonPlanResponse {
    pub lesson_plan: String,
}

/// 试卷响应
#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub generated_exam: String,
}

/// 助手回答响应
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub answer: String,
}

/// 测验响应
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
}

/// 课程记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

/// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub courses: &'static [CourseRecord],
}
