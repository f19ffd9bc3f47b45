//! 区块浏览器 HTTP 客户端
//!
//! 每次请求固定 10 秒超时，不重试。

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::ValidatorError;

/// 单次请求超时
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("crypto-validator/", env!("CARGO_PKG_VERSION"));

/// 构建浏览器 API 客户端
pub fn build_explorer_client() -> Result<reqwest::Client, ValidatorError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(client)
}
