//! 支持的区块链网络
//!
//! 封闭枚举：每个网络固定对应一个地址校验器、一个交易校验器和一个配置键。
//! 不支持运行时注册。

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::address::{CryptoAddress, EthereumAddress, TronAddress},
    error::ValidatorError,
    utils::chain_normalizer,
};

static ETHEREUM_ADDRESS: EthereumAddress = EthereumAddress;
static TRON_ADDRESS: TronAddress = TronAddress;

/// 区块链网络
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum = 1,
    Tron = 2,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Ethereum, Network::Tron];

    /// 稳定的整数标识
    pub fn id(self) -> u8 {
        self as u8
    }

    /// 校验器配置中使用的键
    pub fn config_key(self) -> &'static str {
        match self {
            Network::Ethereum => "eth",
            Network::Tron => "trx",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Network::Ethereum => "ETH",
            Network::Tron => "TRX",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Tron => "Tron",
        }
    }

    /// 该网络的地址校验器（无状态，静态实例）
    pub fn address_validator(self) -> &'static dyn CryptoAddress {
        match self {
            Network::Ethereum => &ETHEREUM_ADDRESS,
            Network::Tron => &TRON_ADDRESS,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.id() == id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Network {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chain_normalizer::normalize_network_identifier(s)
    }
}
