//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::{collections::HashMap, fmt, net::SocketAddr, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{domain::network::Network, service::transaction::TRONGRID_API_HOST};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub explorers: ExplorerConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 区块浏览器配置
#[derive(Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub etherscan_api_key: Option<String>,
    #[serde(default)]
    pub etherscan_api_url: Option<String>,
    #[serde(default = "default_trongrid_api_host")]
    pub trongrid_api_host: String,
}

fn default_trongrid_api_host() -> String {
    TRONGRID_API_HOST.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8088".into()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            etherscan_api_key: std::env::var("ETHERSCAN_API_KEY").ok(),
            etherscan_api_url: std::env::var("ETHERSCAN_API_URL").ok(),
            trongrid_api_host: std::env::var("TRONGRID_API_HOST")
                .unwrap_or_else(|_| TRONGRID_API_HOST.into()),
        }
    }
}

impl fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field(
                "etherscan_api_key",
                &self.etherscan_api_key.as_ref().map(|_| "***"),
            )
            .field("etherscan_api_url", &self.etherscan_api_url)
            .field("trongrid_api_host", &self.trongrid_api_host)
            .finish()
    }
}

impl ExplorerConfig {
    /// 转换为校验器工厂使用的配置映射
    pub fn to_validator_config(&self) -> ValidatorConfig {
        let mut config = ValidatorConfig::new()
            .with(Network::Tron.config_key(), self.trongrid_api_host.clone());

        if let Some(key) = &self.etherscan_api_key {
            config = config.with(Network::Ethereum.config_key(), key.clone());
        }
        if let Some(url) = &self.etherscan_api_url {
            config = config.with_etherscan_api_url(url.clone());
        }
        config
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            explorers: ExplorerConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", self.server.bind_addr))?;

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}

/// 校验器配置：配置键（`eth` / `trx`）→ API Key 或节点地址
///
/// 由启动层构建，工厂只读持有。
#[derive(Clone, Default)]
pub struct ValidatorConfig {
    values: HashMap<String, String>,
    etherscan_api_url: Option<String>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// 覆盖 Etherscan API 地址（测试环境指向 mock 服务）
    pub fn with_etherscan_api_url(mut self, url: impl Into<String>) -> Self {
        self.etherscan_api_url = Some(url.into());
        self
    }

    /// 读取配置值；`""` 和 `"0"` 视为缺失，纯空白字符串保留原值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty() && *value != "0")
    }

    pub fn etherscan_api_url(&self) -> Option<&str> {
        self.etherscan_api_url.as_deref()
    }
}

impl<K, V> FromIterator<(K, V)> for ValidatorConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |config, (key, value)| config.with(key, value))
    }
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ValidatorConfig")
            .field("keys", &keys)
            .field("etherscan_api_url", &self.etherscan_api_url)
            .finish()
    }
}
