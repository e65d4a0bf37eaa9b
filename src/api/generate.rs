//! 内容生成端点
//!
//! 教案、试卷、助手问答、测验：构建提示词，调用 LLM，返回裁剪后的文本。

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::extract::ValidatedJson;
use crate::error::AppResult;
use crate::models::{
    AssistantRequest, AssistantResponse, ExamRequest, ExamResponse, LessonPlanRequest,
    LessonPlanResponse, QuizRequest, QuizResponse,
};
use crate::services::CompletionProfile;
use crate::state::AppState;

/// 调用补全并去除首尾空白
async fn generate(
    state: &AppState,
    prompt: String,
    profile: &CompletionProfile,
) -> AppResult<String> {
    let messages = state.prompts.build_messages(prompt);
    let text = state.completion.complete(messages, profile).await?;
    Ok(text.trim().to_string())
}

/// 生成教案
async fn create_lesson_plan(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LessonPlanRequest>,
) -> AppResult<Json<LessonPlanResponse>> {
    info!("Lesson plan requested: topic={}", req.topic);
    let prompt = state.prompts.lesson_plan_prompt(&req);
    let lesson_plan = generate(&state, prompt, &CompletionProfile::LESSON_PLAN).await?;
    Ok(Json(LessonPlanResponse { lesson_plan }))
}

/// 生成试卷
async fn create_exam(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<ExamRequest>,
) -> AppResult<Json<ExamResponse>> {
    info!(
        "Exam requested: subject={}, questions={}",
        req.subject,
        req.question_count()
    );
    let prompt = state.prompts.exam_prompt(&req);
    let generated_exam = generate(&state, prompt, &CompletionProfile::EXAM).await?;
    Ok(Json(ExamResponse { generated_exam }))
}

/// 教学助手问答
async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<AssistantRequest>,
) -> AppResult<Json<AssistantResponse>> {
    info!("Assistant question received");
    let prompt = state.prompts.assistant_prompt(&req);
    let answer = generate(&state, prompt, &CompletionProfile::ASSISTANT).await?;
    debug!("Assistant answer: {}", answer);
    Ok(Json(AssistantResponse { answer }))
}

/// 生成测验
async fn create_quiz(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<QuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    info!(
        "Quiz requested: topic={}, questions={}",
        req.topic,
        req.question_count()
    );
    let prompt = state.prompts.quiz_prompt(&req);
    let quiz = generate(&state, prompt, &CompletionProfile::QUIZ).await?;
    Ok(Json(QuizResponse { quiz }))
}

/// 创建内容生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/aulas", post(create_lesson_plan))
        .route("/provas", post(create_exam))
        .route("/assistente", post(ask_assistant))
        .route("/quizzes", post(create_quiz))
}
