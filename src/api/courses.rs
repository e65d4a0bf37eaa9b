//! 课程目录端点

use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::models::CoursesResponse;
use crate::services::catalog::list_courses;
use crate::state::AppState;

/// 课程列表处理器
async fn list_courses_handler() -> Json<CoursesResponse> {
    Json(CoursesResponse {
        courses: list_courses(),
    })
}

/// 创建课程路由
pub fn courses_routes() -> Router<Arc<AppState>> {
    Router::new().route("/cursos", get(list_courses_handler))
}
