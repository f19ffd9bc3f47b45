use async_trait::async_trait;
use serde_json::Value;

use super::TransactionValidator;
use crate::{
    domain::{network::Network, verification::VerificationOutcome},
    error::ValidatorError,
    infrastructure::http_client,
};

/// Etherscan API v2
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

const TX_HASH_LEN: usize = 66;

/// Ethereum 交易校验器
///
/// 先检查哈希格式（`0x` + 64 位十六进制），再通过 Etherscan
/// `gettxreceiptstatus` 确认交易存在且执行成功。
#[derive(Clone)]
pub struct EthereumTransactionValidator {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl EthereumTransactionValidator {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ValidatorError> {
        Ok(Self::with_client(
            http_client::build_explorer_client()?,
            api_key,
            ETHERSCAN_API_URL,
        ))
    }

    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            client,
        }
    }

    /// 本地格式检查，不发起网络请求
    pub fn is_well_formed(transaction_hash: &str) -> bool {
        if !transaction_hash.starts_with("0x") {
            return false;
        }
        if transaction_hash.len() != TX_HASH_LEN {
            return false;
        }
        transaction_hash[2..].chars().all(|c| c.is_ascii_hexdigit())
    }

    async fn check_receipt_status(&self, transaction_hash: &str) -> VerificationOutcome {
        let chain_id = ETHEREUM_MAINNET_CHAIN_ID.to_string();
        let query = [
            ("chainid", chain_id.as_str()),
            ("module", "transaction"),
            ("action", "gettxreceiptstatus"),
            ("txhash", transaction_hash),
            ("apikey", self.api_key.as_str()),
        ];

        tracing::debug!(tx_hash = %transaction_hash, "querying etherscan receipt status");

        let response = match self.client.get(&self.api_url).query(&query).send().await {
            Ok(resp) => resp,
            Err(e) => {
                // 请求 URL 含 apikey，日志中去掉
                tracing::warn!(
                    tx_hash = %transaction_hash,
                    error = %e.without_url(),
                    "etherscan request failed"
                );
                return VerificationOutcome::Unverifiable;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(tx_hash = %transaction_hash, %status, "etherscan returned error status");
            return VerificationOutcome::Unverifiable;
        }

        let json = match response.json::<Value>().await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(
                    tx_hash = %transaction_hash,
                    error = %e.without_url(),
                    "failed to parse etherscan response"
                );
                return VerificationOutcome::Unverifiable;
            }
        };

        let outcome = Self::interpret_receipt_status(&json);
        tracing::debug!(tx_hash = %transaction_hash, %outcome, "etherscan receipt status checked");
        outcome
    }

    /// 解析 `{status, result: {status}}`
    ///
    /// 顶层 `status` 表示 API 调用是否成功，`result.status` 表示链上执行结果。
    fn interpret_receipt_status(json: &Value) -> VerificationOutcome {
        let Some(api_status) = json.get("status").and_then(|s| s.as_str()) else {
            return VerificationOutcome::Unverifiable;
        };

        // status != "1"：API 错误（无效 key、限流等），result 为错误描述
        if api_status != "1" {
            tracing::warn!(
                message = json.get("message").and_then(|m| m.as_str()).unwrap_or(""),
                "etherscan api call was not successful"
            );
            return VerificationOutcome::Unverifiable;
        }

        match json
            .get("result")
            .and_then(|r| r.get("status"))
            .and_then(|s| s.as_str())
        {
            Some("1") => VerificationOutcome::Valid,
            _ => VerificationOutcome::Invalid,
        }
    }
}

#[async_trait]
impl TransactionValidator for EthereumTransactionValidator {
    fn network(&self) -> Network {
        Network::Ethereum
    }

    async fn verify(&self, transaction_hash: &str) -> VerificationOutcome {
        if !Self::is_well_formed(transaction_hash) {
            return VerificationOutcome::Invalid;
        }
        self.check_receipt_status(transaction_hash).await
    }
}

impl std::fmt::Debug for EthereumTransactionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumTransactionValidator")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .finish()
    }
}
