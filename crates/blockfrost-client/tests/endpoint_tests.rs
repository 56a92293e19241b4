// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routing tests for every Blockfrost endpoint method
//!
//! A catch-all mock answers `{}` and each test checks the path and query the
//! client actually requested.

use blockfrost_client::{BlockfrostClient, QueryParams};
use serde_json::json;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

use fixtures::*;

async fn setup() -> (MockServer, BlockfrostClient) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;
    let client = create_test_client(&mock_server);
    (mock_server, client)
}

async fn assert_last_path(mock_server: &MockServer, expected: &str) {
    let request = last_request(mock_server).await;
    assert_eq!(request.url.path(), format!("{API_PREFIX}{expected}"));
}

fn no_params() -> QueryParams {
    QueryParams::new()
}

/// Test address endpoint routing
#[tokio::test]
async fn address_endpoints() {
    let (server, client) = setup().await;
    let address = "addr1xyz";

    client.get_address(address, &no_params()).await.unwrap();
    assert_last_path(&server, "/addresses/addr1xyz").await;

    client.get_address_extended(address, &no_params()).await.unwrap();
    assert_last_path(&server, "/addresses/addr1xyz/extended").await;

    client.get_address_details(address, &no_params()).await.unwrap();
    assert_last_path(&server, "/addresses/addr1xyz/total").await;

    client.get_address_utxos(address, &no_params()).await.unwrap();
    assert_last_path(&server, "/addresses/addr1xyz/utxos").await;

    client
        .get_address_transactions(address, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/addresses/addr1xyz/transactions").await;
}

/// Test block endpoint routing with hashes and heights
#[tokio::test]
async fn block_endpoints() {
    let (server, client) = setup().await;

    client.get_latest_block(&no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/latest").await;

    client.get_latest_block_txs(&no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/latest/txs").await;

    client.get_specific_block("4ea1ba29", &no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/4ea1ba29").await;

    client
        .get_specific_block(15_243_593_u64, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/blocks/15243593").await;

    client
        .get_specific_block_in_slot(30_895_909, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/blocks/slot/30895909").await;

    client
        .get_specific_block_in_epoch_slot(300, 5, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/blocks/epoch/300/slot/5").await;

    client.get_next_blocks("abc", &no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/abc/next").await;

    client.get_previous_blocks(42, &no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/42/previous").await;

    client.get_block_txs("abc", &no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/abc/txs").await;

    client.get_block_addresses(7, &no_params()).await.unwrap();
    assert_last_path(&server, "/blocks/7/addresses").await;
}

/// Test epoch endpoint routing
#[tokio::test]
async fn epoch_endpoints() {
    let (server, client) = setup().await;
    let pool = "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2q3lkdy";

    client.get_latest_epoch(&no_params()).await.unwrap();
    assert_last_path(&server, "/epochs/latest").await;

    client
        .get_latest_epoch_protocol_params(&no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/epochs/latest/parameters").await;

    client.get_specific_epoch(225, &no_params()).await.unwrap();
    assert_last_path(&server, "/epochs/225").await;

    client.get_next_epochs(225, &no_params()).await.unwrap();
    assert_last_path(&server, "/epochs/225/next").await;

    client.get_previous_epochs(225, &no_params()).await.unwrap();
    assert_last_path(&server, "/epochs/225/previous").await;

    client
        .get_active_stake_distribution(225, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/epochs/225/stakes").await;

    client
        .get_stake_distribution_by_pool(225, pool, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, &format!("/epochs/225/stakes/{pool}")).await;

    client.get_block_distribution(225, &no_params()).await.unwrap();
    assert_last_path(&server, "/epochs/225/blocks").await;

    client
        .get_block_distribution_by_pool(225, pool, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, &format!("/epochs/225/blocks/{pool}")).await;

    client
        .get_protocol_params_for_epoch(225, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/epochs/225/parameters").await;
}

/// Test ledger and metadata endpoint routing
#[tokio::test]
async fn ledger_and_metadata_endpoints() {
    let (server, client) = setup().await;

    client.get_blockchain_genesis(&no_params()).await.unwrap();
    assert_last_path(&server, "/genesis").await;

    client
        .get_transaction_metadata_labels(&no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/metadata/txs/labels").await;

    client
        .get_transaction_metadata_json(1990, &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/metadata/txs/labels/1990").await;

    client
        .get_transaction_metadata_cbor("721", &no_params())
        .await
        .unwrap();
    assert_last_path(&server, "/metadata/txs/labels/721/cbor").await;
}

/// Test service endpoint routing
#[tokio::test]
async fn service_endpoints() {
    let (server, client) = setup().await;

    client.get_root(&no_params()).await.unwrap();
    assert_last_path(&server, "/").await;

    client.get_health(&no_params()).await.unwrap();
    assert_last_path(&server, "/health").await;

    client.get_health_clock(&no_params()).await.unwrap();
    assert_last_path(&server, "/health/clock").await;

    client.get_network(&no_params()).await.unwrap();
    assert_last_path(&server, "/network").await;
}

/// Test that pagination parameters reach the upstream query string
#[tokio::test]
async fn pagination_parameters_are_forwarded() {
    let (server, client) = setup().await;
    let params = QueryParams::new()
        .with("count", 10)
        .with("page", 3)
        .with("order", "desc");

    client.get_next_blocks("abc", &params).await.unwrap();

    let request = last_request(&server).await;
    assert_eq!(request.url.path(), "/api/v0/blocks/abc/next");
    assert_eq!(request.url.query(), Some("count=10&page=3&order=desc"));
}

/// Test that requests without parameters carry no query string
#[tokio::test]
async fn empty_parameters_add_no_query() {
    let (server, client) = setup().await;

    client.get_specific_epoch(225, &no_params()).await.unwrap();

    let request = last_request(&server).await;
    assert_eq!(request.url.query(), None);
}

/// Test that path arguments are percent-encoded as single segments
#[tokio::test]
async fn path_arguments_are_escaped() {
    let (server, client) = setup().await;

    client.get_address("a b?", &no_params()).await.unwrap();

    let request = last_request(&server).await;
    assert_eq!(request.url.path(), "/api/v0/addresses/a%20b%3F");
    assert_eq!(request.url.query(), None);
}
