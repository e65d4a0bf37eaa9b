//! Aymar Tech - 教育内容生成后端
//!
//! 基于 axum 的 HTTP 服务：将教案、试卷、问答、测验请求转换为提示词并转发给
//! OpenAI 兼容的补全接口，另提供固定的课程目录。

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
