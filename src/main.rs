//! Aymar Tech - 教育内容生成后端
//!
//! 启动入口：加载配置、初始化日志、构建路由并监听。

use anyhow::Context;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aymar_backend::api::build_app;
use aymar_backend::config::AppConfig;
use aymar_backend::llm::build_chat_completions_endpoint;
use aymar_backend::services::LlmService;
use aymar_backend::state::create_shared_state;
use aymar_backend::utils::mask_api_key;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aymar_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aymar Tech backend...");

    // 缺少 OPENAI_API_KEY 时拒绝启动
    let config = AppConfig::load().context("failed to load configuration")?;
    let addr = config.socket_addr()?;

    info!(
        "LLM endpoint: {}, api_key={}",
        build_chat_completions_endpoint(&config.base_url),
        mask_api_key(config.api_key.expose_secret())
    );

    let llm_service = LlmService::from_config(&config).context("failed to create LLM client")?;
    let state = create_shared_state(Arc::new(llm_service));

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
