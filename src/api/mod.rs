//! API 路由模块

mod courses;
mod extract;
mod generate;
mod health;

pub use courses::courses_routes;
pub use extract::ValidatedJson;
pub use generate::generate_routes;
pub use health::health_routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(generate_routes())
        .merge(courses_routes())
        .with_state(state)
}

/// 完整应用：路由 + CORS（允许所有来源）+ 请求追踪
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
