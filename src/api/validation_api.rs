// 地址 / 交易哈希校验 API
// POST /api/v1/validate/address
// POST /api/v1/validate/transaction
// POST /api/v1/validate

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    api::response::ValidationResponse,
    app_state::AppState,
    domain::network::Network,
    error::AppError,
    service::constraint::{CryptoAddressConstraint, CryptoTransactionHashConstraint, Violation},
};

pub const NOT_BLANK_MESSAGE: &str = "This value should not be blank.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /healthz
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// 地址校验请求
#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub network: String,
    #[serde(default)]
    pub address: Value,
}

/// 交易哈希校验请求
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub network: String,
    #[serde(default)]
    pub transaction_hash: Value,
}

/// 组合校验请求，两个字段均可选
#[derive(Debug, Deserialize)]
pub struct CombinedRequest {
    pub network: String,
    #[serde(default)]
    pub address: Value,
    #[serde(default)]
    pub transaction_hash: Value,
}

/// POST /api/v1/validate/address
///
/// 地址必填；网络标识支持别名（`eth`、`TRX`、`1` ...）。
pub async fn validate_address(
    State(_state): State<Arc<AppState>>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(req) = payload?;
    let network: Network = req.network.parse()?;

    let errors = if is_blank(&req.address) {
        vec![NOT_BLANK_MESSAGE.to_string()]
    } else {
        messages(CryptoAddressConstraint::new(network).validate(&req.address)?)
    };

    tracing::info!(%network, valid = errors.is_empty(), "address validated");

    Ok(Json(ValidationResponse::from_errors(
        errors,
        "Address is valid",
        "Address validation failed",
        json!({ "network": network, "address": req.address }),
    )))
}

/// POST /api/v1/validate/transaction
pub async fn validate_transaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(req) = payload?;
    let network: Network = req.network.parse()?;

    let errors = if is_blank(&req.transaction_hash) {
        vec![NOT_BLANK_MESSAGE.to_string()]
    } else {
        messages(
            CryptoTransactionHashConstraint::new(network)
                .validate(&req.transaction_hash, &state.factory)
                .await?,
        )
    };

    tracing::info!(%network, valid = errors.is_empty(), "transaction validated");

    Ok(Json(ValidationResponse::from_errors(
        errors,
        "Transaction is valid",
        "Transaction validation failed",
        json!({ "network": network, "transaction_hash": req.transaction_hash }),
    )))
}

/// POST /api/v1/validate
///
/// 地址与交易哈希都为空时直接通过。
pub async fn validate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CombinedRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(req) = payload?;
    let network: Network = req.network.parse()?;

    let mut violations = CryptoAddressConstraint::new(network).validate(&req.address)?;
    violations.extend(
        CryptoTransactionHashConstraint::new(network)
            .validate(&req.transaction_hash, &state.factory)
            .await?,
    );
    let errors = messages(violations);

    tracing::info!(%network, valid = errors.is_empty(), "combined validation finished");

    Ok(Json(ValidationResponse::from_errors(
        errors,
        "All validations passed",
        "Validation failed",
        json!({
            "network": network,
            "address": req.address,
            "transaction_hash": req.transaction_hash,
        }),
    )))
}

/// NotBlank：`null` 或空字符串
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn messages(violations: Vec<Violation>) -> Vec<String> {
    violations.into_iter().map(|v| v.message).collect()
}
