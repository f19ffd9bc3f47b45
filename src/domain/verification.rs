//! 交易远程校验结果

use std::fmt;

use serde::{Deserialize, Serialize};

/// 交易校验结果（三态）
///
/// 布尔契约 `is_valid` 会把 `Invalid` 和 `Unverifiable` 都归为 `false`；
/// 需要区分"交易不存在"和"浏览器 API 不可达"的调用方使用此类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// 交易存在且执行成功
    Valid,

    /// 格式错误、交易不存在或链上执行失败
    Invalid,

    /// 网络错误、超时、非 2xx 响应或响应无法解析
    Unverifiable,
}

impl VerificationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// 获取状态描述
    pub fn description(&self) -> &'static str {
        match self {
            Self::Valid => "transaction exists and succeeded",
            Self::Invalid => "transaction is malformed, missing or failed",
            Self::Unverifiable => "transaction could not be verified",
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Unverifiable => "unverifiable",
        };
        write!(f, "{}", s)
    }
}
