//! 交易校验器工厂
//!
//! 启动时构建一次，持有只读的 [`ValidatorConfig`]；每次调用都返回新的校验器实例。

use crate::{
    config::ValidatorConfig,
    domain::network::Network,
    error::ValidatorError,
    infrastructure::http_client,
    service::transaction::{
        EthereumTransactionValidator, TransactionValidator, TronTransactionValidator,
        ETHERSCAN_API_URL,
    },
};

/// 交易校验器工厂
#[derive(Debug, Clone)]
pub struct ValidatorFactory {
    config: ValidatorConfig,
    client: reqwest::Client,
}

impl ValidatorFactory {
    pub fn new(config: ValidatorConfig) -> Result<Self, ValidatorError> {
        Ok(Self {
            config,
            client: http_client::build_explorer_client()?,
        })
    }

    /// 创建指定网络的交易校验器
    ///
    /// 配置缺失或为空时返回 [`ValidatorError::MissingConfig`]。
    pub fn create_validator(
        &self,
        network: Network,
    ) -> Result<Box<dyn TransactionValidator>, ValidatorError> {
        let value = self.config_value(network)?;

        let validator: Box<dyn TransactionValidator> = match network {
            Network::Ethereum => Box::new(EthereumTransactionValidator::with_client(
                self.client.clone(),
                value,
                self.config
                    .etherscan_api_url()
                    .unwrap_or(ETHERSCAN_API_URL),
            )),
            Network::Tron => Box::new(TronTransactionValidator::with_client(
                self.client.clone(),
                value,
            )),
        };

        Ok(validator)
    }

    /// 启动时检查给定网络的配置是否齐全
    pub fn ensure_configured(&self, networks: &[Network]) -> Result<(), ValidatorError> {
        for network in networks {
            self.config_value(*network)?;
        }
        Ok(())
    }

    fn config_value(&self, network: Network) -> Result<&str, ValidatorError> {
        let key = network.config_key();
        self.config
            .get(key)
            .ok_or_else(|| ValidatorError::missing_config(key))
    }
}
