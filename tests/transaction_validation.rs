//! 交易校验集成测试（mock Etherscan / TronGrid）

mod common;

use common::*;
use crypto_validator::{
    domain::{Network, VerificationOutcome},
    service::{CryptoTransactionHashConstraint, TransactionValidator, TronTransactionValidator},
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_etherscan(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(ETHERSCAN_PATH))
        .and(query_param("chainid", "1"))
        .and(query_param("module", "transaction"))
        .and(query_param("action", "gettxreceiptstatus"))
        .and(query_param("txhash", ETH_TX_HASH))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_ethereum_successful_receipt_is_valid() {
    let server = MockServer::start().await;
    mount_etherscan(
        &server,
        json!({"status": "1", "message": "OK", "result": {"status": "1"}}),
    )
    .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();
    assert_eq!(validator.verify(ETH_TX_HASH).await, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_ethereum_failed_receipt_is_invalid() {
    let server = MockServer::start().await;
    mount_etherscan(
        &server,
        json!({"status": "1", "message": "OK", "result": {"status": "0"}}),
    )
    .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();
    assert!(!validator.is_valid(ETH_TX_HASH).await);
}

#[tokio::test]
async fn test_ethereum_api_error_is_unverifiable() {
    let server = MockServer::start().await;
    mount_etherscan(
        &server,
        json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"}),
    )
    .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();
    assert_eq!(
        validator.verify(ETH_TX_HASH).await,
        VerificationOutcome::Unverifiable
    );
}

#[tokio::test]
async fn test_ethereum_malformed_hash_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();

    for hash in [
        "",
        "0x1234",
        "5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
        "0xzc504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
    ] {
        assert_eq!(validator.verify(hash).await, VerificationOutcome::Invalid);
    }
}

#[tokio::test]
async fn test_ethereum_server_error_is_unverifiable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETHERSCAN_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();
    assert_eq!(
        validator.verify(ETH_TX_HASH).await,
        VerificationOutcome::Unverifiable
    );
    assert!(!validator.is_valid(ETH_TX_HASH).await);
}

#[tokio::test]
async fn test_ethereum_non_json_body_is_unverifiable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETHERSCAN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let validator = mock_factory(&server)
        .create_validator(Network::Ethereum)
        .unwrap();
    assert_eq!(
        validator.verify(ETH_TX_HASH).await,
        VerificationOutcome::Unverifiable
    );
}

#[tokio::test]
async fn test_tron_matching_tx_id_is_valid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .and(body_json(json!({ "value": TRON_TX_ID })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "txID": TRON_TX_ID,
            "ret": [{"contractRet": "SUCCESS"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let validator = mock_factory(&server).create_validator(Network::Tron).unwrap();
    assert_eq!(validator.verify(TRON_TX_ID).await, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_tron_unknown_transaction_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let validator = mock_factory(&server).create_validator(Network::Tron).unwrap();
    assert_eq!(validator.verify(TRON_TX_ID).await, VerificationOutcome::Invalid);
    // 无本地格式检查，任意字符串都会发起查询
    assert_eq!(validator.verify("not-a-hash").await, VerificationOutcome::Invalid);
}

#[tokio::test]
async fn test_tron_host_with_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "txID": TRON_TX_ID })))
        .expect(1)
        .mount(&server)
        .await;

    let validator = TronTransactionValidator::new(format!("{}/", server.uri())).unwrap();
    assert_eq!(validator.verify(TRON_TX_ID).await, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_tron_node_error_is_unverifiable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let validator = mock_factory(&server).create_validator(Network::Tron).unwrap();
    assert_eq!(
        validator.verify(TRON_TX_ID).await,
        VerificationOutcome::Unverifiable
    );
}

#[tokio::test]
async fn test_unreachable_host_is_unverifiable() {
    let validator = TronTransactionValidator::new("http://127.0.0.1:9").unwrap();
    assert_eq!(
        validator.verify(TRON_TX_ID).await,
        VerificationOutcome::Unverifiable
    );
}

#[tokio::test]
async fn test_constraint_uses_factory_validator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let factory = mock_factory(&server);
    let constraint = CryptoTransactionHashConstraint::new(Network::Tron);

    let violations = constraint
        .validate(&json!(TRON_TX_ID), &factory)
        .await
        .unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].message,
        CryptoTransactionHashConstraint::DEFAULT_MESSAGE
    );
}

#[tokio::test]
async fn test_ethereum_repeated_checks_are_consistent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETHERSCAN_PATH))
        .and(query_param("txhash", ETH_TX_HASH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": {"status": "1"}
        })))
        // 每次调用都查询一次，不缓存
        .expect(4)
        .mount(&server)
        .await;

    let factory = mock_factory(&server);
    let first = factory.create_validator(Network::Ethereum).unwrap();
    let second = factory.create_validator(Network::Ethereum).unwrap();

    let results = [
        first.is_valid(ETH_TX_HASH).await,
        first.is_valid(ETH_TX_HASH).await,
        first.verify(ETH_TX_HASH).await.is_valid(),
        second.is_valid(ETH_TX_HASH).await,
    ];
    assert_eq!(results, [true; 4]);
}

#[tokio::test]
async fn test_tron_repeated_checks_are_consistent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRON_PATH))
        .and(body_json(json!({ "value": TRON_TX_ID })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(4)
        .mount(&server)
        .await;

    let factory = mock_factory(&server);
    let first = factory.create_validator(Network::Tron).unwrap();
    let second = factory.create_validator(Network::Tron).unwrap();

    let outcomes = [
        first.verify(TRON_TX_ID).await,
        first.verify(TRON_TX_ID).await,
        second.verify(TRON_TX_ID).await,
    ];
    assert_eq!(outcomes, [VerificationOutcome::Invalid; 3]);
    assert!(!second.is_valid(TRON_TX_ID).await);
}
