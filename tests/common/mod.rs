//! 测试辅助模块
//! 提供 mock 浏览器服务和测试应用

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use crypto_validator::{
    api, app_state::AppState, config::ValidatorConfig, service::ValidatorFactory,
};
use wiremock::MockServer;

pub const ETHERSCAN_PATH: &str = "/v2/api";
pub const TRON_PATH: &str = "/wallet/gettransactionbyid";
pub const TEST_API_KEY: &str = "test-etherscan-key";

pub const ETH_TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
pub const TRON_TX_ID: &str = "7c2d4206c03a883dd9066d620335dc1be272a8dc733cfa3f6d10308faa37facc";

pub const VALID_ETH_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const VALID_TRON_ADDRESS: &str = "TLyqzVGLV1srkB7dToTAEqgDSfPtXRJZYH";

/// 所有网络都指向同一个 mock 服务
pub fn mock_config(server: &MockServer) -> ValidatorConfig {
    ValidatorConfig::new()
        .with("eth", TEST_API_KEY)
        .with("trx", server.uri())
        .with_etherscan_api_url(format!("{}{}", server.uri(), ETHERSCAN_PATH))
}

pub fn mock_factory(server: &MockServer) -> ValidatorFactory {
    ValidatorFactory::new(mock_config(server)).expect("Failed to build validator factory")
}

/// 创建测试路由
pub fn create_test_app(config: ValidatorConfig) -> Router {
    let factory = ValidatorFactory::new(config).expect("Failed to build validator factory");
    api::routes(Arc::new(AppState::new(factory)))
}
