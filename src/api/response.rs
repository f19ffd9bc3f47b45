//! 校验接口响应格式：`{ status, message, data? , errors? }`

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// 校验结果
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub status: ResultStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResponse {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }

    /// 无错误时成功，否则失败
    pub fn from_errors(
        errors: Vec<String>,
        success_message: &str,
        error_message: &str,
        data: Value,
    ) -> Self {
        if errors.is_empty() {
            Self::success(success_message, data)
        } else {
            Self::error(error_message, errors)
        }
    }
}
