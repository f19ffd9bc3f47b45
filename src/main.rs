//! crypto-validator 主入口

use std::sync::Arc;

use anyhow::{Context, Result};
use crypto_validator::{
    api,
    app_state::AppState,
    config::Config,
    domain::Network,
    infrastructure::logging,
    service::ValidatorFactory,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载环境变量
    dotenvy::dotenv().ok();

    // 2. 加载配置（CONFIG_PATH 指向的文件优先）
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = Config::from_env_and_file(config_path.as_deref())?;
    config.validate()?;

    // 3. 初始化日志
    logging::init_logging(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting crypto-validator");
    tracing::debug!(explorers = ?config.explorers, "explorer configuration loaded");

    // 4. 构建校验器工厂，缺少配置时启动失败
    let factory = ValidatorFactory::new(config.explorers.to_validator_config())?;
    factory
        .ensure_configured(&Network::ALL)
        .context("validator configuration is incomplete")?;

    let state = Arc::new(AppState::new(factory));
    let app = api::routes(state);

    // 5. 启动服务
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
