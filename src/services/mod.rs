//! 服务层模块

pub mod catalog;
mod llm_service;
mod prompt_service;

pub use llm_service::{CompletionProfile, CompletionProvider, LlmService};
pub use prompt_service::PromptService;
