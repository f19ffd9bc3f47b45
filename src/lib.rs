//! crypto-validator - 加密货币地址与交易哈希校验服务
//!
//! - Ethereum：EIP-55 校验和 + Etherscan 交易回执
//! - Tron：Base58Check 地址 + TronGrid 交易查询

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use app_state::AppState;
pub use error::{AppError, AppErrorCode, ValidatorError};

pub mod prelude {
    pub use crate::{
        app_state::AppState,
        config::ValidatorConfig,
        domain::{is_valid_address, CryptoAddress, Network, VerificationOutcome},
        error::{AppError, AppErrorCode, ValidatorError},
        service::{
            CryptoAddressConstraint, CryptoTransactionHashConstraint, TransactionValidator,
            ValidatorFactory, Violation,
        },
    };
}
