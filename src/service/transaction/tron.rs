use async_trait::async_trait;
use serde_json::{json, Value};

use super::TransactionValidator;
use crate::{
    domain::{network::Network, verification::VerificationOutcome},
    error::ValidatorError,
    infrastructure::http_client,
};

/// TronGrid 默认节点
pub const TRONGRID_API_HOST: &str = "https://api.trongrid.io";

const GET_TRANSACTION_BY_ID: &str = "/wallet/gettransactionbyid";

/// Tron 交易校验器
///
/// 通过全节点 `gettransactionbyid` 查询交易，返回的 `txID` 与请求哈希一致即有效。
/// 不做本地格式检查。
#[derive(Debug, Clone)]
pub struct TronTransactionValidator {
    api_host: String,
    client: reqwest::Client,
}

impl TronTransactionValidator {
    pub fn new(api_host: impl Into<String>) -> Result<Self, ValidatorError> {
        Ok(Self::with_client(
            http_client::build_explorer_client()?,
            api_host,
        ))
    }

    /// 使用默认 TronGrid 节点
    pub fn with_default_host() -> Result<Self, ValidatorError> {
        Self::new(TRONGRID_API_HOST)
    }

    pub fn with_client(client: reqwest::Client, api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            client,
        }
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api_host.trim_end_matches('/'),
            GET_TRANSACTION_BY_ID
        )
    }

    fn interpret_transaction(json: &Value, transaction_hash: &str) -> VerificationOutcome {
        match json.get("txID").and_then(|id| id.as_str()) {
            Some(tx_id) if tx_id == transaction_hash => VerificationOutcome::Valid,
            _ => VerificationOutcome::Invalid,
        }
    }
}

#[async_trait]
impl TransactionValidator for TronTransactionValidator {
    fn network(&self) -> Network {
        Network::Tron
    }

    async fn verify(&self, transaction_hash: &str) -> VerificationOutcome {
        let url = self.endpoint();
        tracing::debug!(tx_hash = %transaction_hash, %url, "querying tron transaction");

        let response = match self
            .client
            .post(&url)
            .json(&json!({ "value": transaction_hash }))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(tx_hash = %transaction_hash, error = %e, "tron node request failed");
                return VerificationOutcome::Unverifiable;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(tx_hash = %transaction_hash, %status, "tron node returned error status");
            return VerificationOutcome::Unverifiable;
        }

        let json = match response.json::<Value>().await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(tx_hash = %transaction_hash, error = %e, "failed to parse tron node response");
                return VerificationOutcome::Unverifiable;
            }
        };

        let outcome = Self::interpret_transaction(&json, transaction_hash);
        tracing::debug!(tx_hash = %transaction_hash, %outcome, "tron transaction checked");
        outcome
    }
}
