//! 表单约束适配层
//!
//! 约定：`null` 和空字符串不产生违规，必填检查由外部的 NotBlank/NotNull 约束负责。
//! 非字符串输入属于调用方编程错误，返回 [`ValidatorError::UnexpectedValue`]。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::network::Network, error::ValidatorError, service::validator_factory::ValidatorFactory,
};

/// 约束违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub message: String,
    pub network: Network,
}

/// 地址约束
#[derive(Debug, Clone)]
pub struct CryptoAddressConstraint {
    pub network: Network,
    pub message: String,
}

impl CryptoAddressConstraint {
    pub const DEFAULT_MESSAGE: &'static str = "This value is not a valid cryptocurrency address.";

    pub fn new(network: Network) -> Self {
        Self {
            network,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn validate(&self, value: &Value) -> Result<Vec<Violation>, ValidatorError> {
        Ok(self.validate_str(extract_string(value)?))
    }

    pub fn validate_str(&self, value: Option<&str>) -> Vec<Violation> {
        let Some(address) = value.filter(|v| !v.is_empty()) else {
            return Vec::new();
        };

        if self.network.address_validator().is_valid(address) {
            Vec::new()
        } else {
            tracing::debug!(network = %self.network, "address constraint violated");
            vec![violation(&self.message, self.network)]
        }
    }
}

/// 交易哈希约束
#[derive(Debug, Clone)]
pub struct CryptoTransactionHashConstraint {
    pub network: Network,
    pub message: String,
}

impl CryptoTransactionHashConstraint {
    pub const DEFAULT_MESSAGE: &'static str = "This value is not a valid transaction hash.";

    pub fn new(network: Network) -> Self {
        Self {
            network,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub async fn validate(
        &self,
        value: &Value,
        factory: &ValidatorFactory,
    ) -> Result<Vec<Violation>, ValidatorError> {
        self.validate_str(extract_string(value)?, factory).await
    }

    /// 每次调用通过工厂创建新的校验器；工厂配置错误原样返回
    pub async fn validate_str(
        &self,
        value: Option<&str>,
        factory: &ValidatorFactory,
    ) -> Result<Vec<Violation>, ValidatorError> {
        let Some(hash) = value.filter(|v| !v.is_empty()) else {
            return Ok(Vec::new());
        };

        let validator = factory.create_validator(self.network)?;
        if validator.is_valid(hash).await {
            Ok(Vec::new())
        } else {
            tracing::debug!(network = %self.network, "transaction hash constraint violated");
            Ok(vec![violation(&self.message, self.network)])
        }
    }
}

fn violation(message: &str, network: Network) -> Violation {
    Violation {
        message: message.to_string(),
        network,
    }
}

/// `null` / `""` → `None`；字符串 → `Some`；其他类型 → 编程错误
fn extract_string(value: &Value) -> Result<Option<&str>, ValidatorError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(ValidatorError::UnexpectedValue {
            expected: "string",
            actual: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
