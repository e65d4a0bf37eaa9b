//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。启动后只读，无需加锁。

use std::sync::Arc;

use crate::services::{CompletionProvider, PromptService};

/// 应用共享状态
pub struct AppState {
    /// 补全提供方（持有凭据）
    pub completion: Arc<dyn CompletionProvider>,
    /// 提示词模板
    pub prompts: PromptService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            completion,
            prompts: PromptService::new(),
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(completion: Arc<dyn CompletionProvider>) -> Arc<AppState> {
    Arc::new(AppState::new(completion))
}
