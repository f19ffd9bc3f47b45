//! HTTP 校验接口
//!
//! - `GET  /healthz`
//! - `POST /api/v1/validate`              地址 + 交易哈希（均可选）
//! - `POST /api/v1/validate/address`      仅地址（必填）
//! - `POST /api/v1/validate/transaction`  仅交易哈希（必填）

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, error::AppError};

pub mod response;
pub mod validation_api;

/// 构建路由
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(validation_api::healthz))
        .route("/api/v1/validate", post(validation_api::validate))
        .route(
            "/api/v1/validate/address",
            post(validation_api::validate_address),
        )
        .route(
            "/api/v1/validate/transaction",
            post(validation_api::validate_transaction),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> AppError {
    AppError::not_found("Route not found")
}
