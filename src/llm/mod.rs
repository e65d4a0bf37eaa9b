//! LLM 模块
//!
//! 提供 OpenAI 兼容 Chat Completions 接口的客户端。

mod client;
mod format;
mod openai;
mod types;

pub use client::LlmClient;
pub use format::build_chat_completions_endpoint;
pub use types::*;
