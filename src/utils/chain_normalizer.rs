//! 网络标识符标准化模块
//!
//! 将表单/接口传入的任意写法（名称、符号、数字标识、配置键）解析为 [`Network`]。

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{domain::network::Network, error::ValidatorError};

/// 网络别名配置
#[derive(Debug, Clone)]
struct NetworkAliases {
    network: Network,
    /// 别名列表
    aliases: &'static [&'static str],
}

/// 别名注册表（静态初始化）
static NETWORK_REGISTRY: Lazy<HashMap<String, Network>> = Lazy::new(|| {
    let networks = [
        NetworkAliases {
            network: Network::Ethereum,
            aliases: &["ethereum", "Ethereum", "ETHEREUM"],
        },
        NetworkAliases {
            network: Network::Tron,
            aliases: &["tron", "Tron", "TRON"],
        },
    ];

    let mut registry = HashMap::new();
    for entry in networks {
        for alias in entry.aliases {
            registry.insert(alias.to_string(), entry.network);
        }

        // 注册符号、配置键和数字标识
        registry.insert(entry.network.symbol().to_string(), entry.network);
        registry.insert(entry.network.config_key().to_string(), entry.network);
        registry.insert(entry.network.id().to_string(), entry.network);
    }

    registry
});

/// 标准化网络标识符
///
/// # 示例
/// ```rust
/// # use crypto_validator::{domain::network::Network, utils::chain_normalizer::normalize_network_identifier};
/// assert_eq!(normalize_network_identifier("ETH").unwrap(), Network::Ethereum);
/// assert_eq!(normalize_network_identifier("2").unwrap(), Network::Tron);
/// ```
pub fn normalize_network_identifier(input: &str) -> Result<Network, ValidatorError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidatorError::UnsupportedNetwork(
            "network identifier cannot be empty".to_string(),
        ));
    }

    NETWORK_REGISTRY
        .get(trimmed)
        .copied()
        .ok_or_else(|| ValidatorError::UnsupportedNetwork(trimmed.to_string()))
}
