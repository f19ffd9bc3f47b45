//! Domain 模块
//!
//! 网络注册表、纯地址校验和校验结果模型

pub mod address;
pub mod network;
pub mod verification;

// 重新导出常用类型
pub use address::{is_valid_address, CryptoAddress, EthereumAddress, TronAddress};
pub use network::Network;
pub use verification::VerificationOutcome;
