//! 交易哈希校验
//!
//! 本地格式检查 + 区块浏览器远程查询。
//!
//! 注意：布尔契约下，网络不可达和交易不存在都返回 `false`；
//! 浏览器 API 故障时所有交易都会被判定为无效。需要区分时使用 [`TransactionValidator::verify`]。

mod ethereum;
mod tron;

pub use ethereum::{EthereumTransactionValidator, ETHERSCAN_API_URL, ETHEREUM_MAINNET_CHAIN_ID};
pub use tron::{TronTransactionValidator, TRONGRID_API_HOST};

use async_trait::async_trait;

use crate::domain::{network::Network, verification::VerificationOutcome};

/// 交易校验器
///
/// 实现只会在网络 I/O 上挂起；丢弃返回的 future 即取消进行中的请求。
#[async_trait]
pub trait TransactionValidator: Send + Sync {
    fn network(&self) -> Network;

    /// 三态校验结果
    async fn verify(&self, transaction_hash: &str) -> VerificationOutcome;

    /// 交易存在且执行成功时返回 `true`
    async fn is_valid(&self, transaction_hash: &str) -> bool {
        self.verify(transaction_hash).await.is_valid()
    }
}
