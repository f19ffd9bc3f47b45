use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 校验引擎的类型化错误
///
/// 注意：地址/交易"无效"不是错误，只会返回 `false`。
/// 这里只包含部署配置错误和调用方编程错误。
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// 缺少网络对应的配置项（API Key / 节点地址）
    #[error("Configuration value for key `{key}` is missing.")]
    MissingConfig { key: String },

    /// 约束收到了非字符串的值
    #[error("Expected argument of type \"{expected}\", \"{actual}\" given")]
    UnexpectedValue {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unsupported network identifier: {0}")]
    UnsupportedNetwork(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ValidatorError {
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfig { key: key.into() }
    }
}

#[derive(Debug, Clone)]
pub enum AppErrorCode {
    BadRequest,
    NotFound,
    ChainNotSupported,
    InvalidParameter,
    ConfigurationError,
}

impl AppErrorCode {
    fn as_str(&self) -> &'static str {
        match self {
            AppErrorCode::BadRequest => "bad_request",
            AppErrorCode::NotFound => "not_found",
            AppErrorCode::ChainNotSupported => "chain_not_supported",
            AppErrorCode::InvalidParameter => "invalid_parameter",
            AppErrorCode::ConfigurationError => "configuration_error",
        }
    }
}

/// HTTP 层错误
#[derive(Debug, Clone)]
pub struct AppError {
    pub code: AppErrorCode,
    pub message: String,
    pub status: StatusCode,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::BadRequest,
            message: msg.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::NotFound,
            message: msg.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<ValidatorError> for AppError {
    fn from(err: ValidatorError) -> Self {
        match err {
            ValidatorError::UnsupportedNetwork(_) => Self {
                code: AppErrorCode::ChainNotSupported,
                message: err.to_string(),
                status: StatusCode::BAD_REQUEST,
            },
            ValidatorError::UnexpectedValue { .. } => Self {
                code: AppErrorCode::InvalidParameter,
                message: err.to_string(),
                status: StatusCode::BAD_REQUEST,
            },
            // 配置错误属于部署问题，不暴露具体的配置项给调用方
            ValidatorError::MissingConfig { .. } | ValidatorError::HttpClient(_) => {
                tracing::error!(error = %err, "validator configuration error");
                Self {
                    code: AppErrorCode::ConfigurationError,
                    message: "Validation service is not configured".to_string(),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        }
    }
}
