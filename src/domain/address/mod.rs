//! 地址校验模块
//!
//! 纯函数校验：只检查格式与校验和，不做任何网络请求。
//! 格式错误只会返回 `false`，不会返回错误。

mod ethereum;
mod tron;

pub use ethereum::EthereumAddress;
pub use tron::TronAddress;

use crate::domain::network::Network;

/// 地址校验器
pub trait CryptoAddress: Send + Sync {
    fn is_valid(&self, address: &str) -> bool;
}

/// 按网络校验地址
pub fn is_valid_address(network: Network, address: &str) -> bool {
    network.address_validator().is_valid(address)
}
