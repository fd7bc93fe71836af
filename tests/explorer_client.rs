use std::time::Duration;

use olt_explorer::amount::Currency;
use olt_explorer::http::{ExplorerHttpClient, HttpError};
use olt_explorer::transactions::history_processor::{TxKind, TypeCode};
use olt_explorer::transactions::ledger::{AccountHistory, AccountTxsParams, AccountTxsQuery, BlocksQuery, QueryError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SENDER: &str = "0lt52901e9603f9d504049c9d79132e3e9c2820b6a4";
const RECIPIENT: &str = "0lt90d3cd0a9cf7f767b990159f66b3e071cb3825c8";

fn account_txs_body() -> serde_json::Value {
    json!({
        "txs": [
            {
                "hash": "0xa1206b5ec7e9b71666a497a44160317c7973b6fc880652b0ec442f97d893cc4b",
                "type": "SEND",
                "from": SENDER,
                "recipients": [
                    {"account": RECIPIENT, "amount": "1000000000000000000 OLT"}
                ],
                "blockHeight": 3015,
                "memo": "31cdc070-bf2e-11ea-a059-fd066626c2e0",
                "fee": {"amount": "1000000000 OLT", "gas": 40000},
                "txDetail": {
                    "amount": {"currency": "OLT", "value": "1000000000000000000"},
                    "from": SENDER,
                    "to": RECIPIENT
                },
                "chainID": "OneLedger-6822"
            },
            {
                "hash": "0x6a556832e79ad487846ac3a89cb8e071e2960880c9951a39740feea2720abf51",
                "type": "DOMAIN_SELL",
                "from": SENDER,
                "recipients": null,
                "blockHeight": 3600,
                "memo": "",
                "fee": {"amount": "1000000000 OLT", "gas": 80000},
                "txDetail": {
                    "name": "0x74657374646f6d61696e312e6f6c74",
                    "cancelSale": false,
                    "price": {"currency": "OLT", "value": "100000000000000000000"}
                },
                "chainID": "OneLedger-6822"
            }
        ],
        "totalPage": 3
    })
}

async fn client_for(server: &MockServer) -> ExplorerHttpClient {
    ExplorerHttpClient::with_timeout(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_query_account_txs_sends_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}/txs", SENDER)))
        .and(query_param("page", "0"))
        .and(query_param("pagesize", "2"))
        .and(query_param("currency", "olt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_txs_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = AccountTxsQuery::new(SENDER)
        .unwrap()
        .with_page(0)
        .with_page_size(2)
        .with_currency(Currency::Olt);

    let page = client.query_account_txs(&query).await.unwrap();

    assert_eq!(page.total_page, 3);
    assert_eq!(page.txs.len(), 2);
    assert_eq!(page.txs[0].kind, TxKind::Send);
    assert_eq!(page.txs[1].kind, TxKind::DomainSell);
    assert!(page.txs[1].recipients.is_empty());
    assert!(client.last_latency().await.is_some());
}

#[tokio::test]
async fn test_account_history_classifies_explorer_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}/txs", SENDER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_txs_body()))
        .mount(&server)
        .await;

    let history = AccountHistory::new(client_for(&server).await);
    let page = history.query(&AccountTxsParams::new(SENDER)).await.unwrap();

    assert_eq!(page.total_page, 3);
    assert!(page.rejected.is_empty());
    assert_eq!(page.txs.len(), 2);

    let send = &page.txs[0];
    assert_eq!(send.type_code, TypeCode::SendSenderOlt);
    assert_eq!(send.display_value, "(-1 OLT)");
    assert_eq!(send.to, RECIPIENT);
    assert_eq!(send.gas_price, "0.000000001 OLT");
    assert_eq!(send.total_fee, "0.00004 OLT");

    let sale = &page.txs[1];
    assert_eq!(sale.type_code, TypeCode::DomainOnSale);
    assert_eq!(sale.display_value, "");
    assert_eq!(sale.original_value, "100 OLT");
    assert_eq!(sale.domain_name.as_deref(), Some("testdomain1.olt"));
    assert_eq!(sale.total_fee, "0.00008 OLT");
}

#[tokio::test]
async fn test_account_history_skips_malformed_record() {
    let server = MockServer::start().await;
    let mut body = account_txs_body();
    body["txs"][1]["fee"]["gas"] = json!("lots");
    body["txs"][0]["blockHeight"] = serde_json::Value::Null;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}/txs", SENDER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let history = AccountHistory::new(client_for(&server).await);
    let page = history.query(&AccountTxsParams::new(SENDER)).await.unwrap();

    assert_eq!(page.txs.len(), 1);
    assert_eq!(page.txs[0].type_code, TypeCode::SendSenderOlt);
    assert_eq!(page.txs[0].block_height, 0);
    assert_eq!(page.rejected.len(), 1);
    assert_eq!(
        page.rejected[0].hash,
        "0x6a556832e79ad487846ac3a89cb8e071e2960880c9951a39740feea2720abf51"
    );
    assert_eq!(page.rejected[0].kind, TxKind::DomainSell);
    assert_eq!(page.total_page, 3);
}

#[tokio::test]
async fn test_account_history_rejects_invalid_params_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_txs_body()))
        .expect(0)
        .mount(&server)
        .await;

    let history = AccountHistory::new(client_for(&server).await);
    let params = AccountTxsParams {
        page: Some("-1".to_string()),
        ..AccountTxsParams::new(SENDER)
    };

    let err = history.query(&params).await.unwrap_err();

    assert!(err.to_string().contains("Invalid page number"));
}

#[tokio::test]
async fn test_server_error_is_reported_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("explorer unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = AccountTxsQuery::new(SENDER).unwrap();

    match client.query_account_txs(&query).await {
        Err(HttpError::ServerError { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "explorer unavailable");
        },
        other => panic!("expected server error, got {:?}", other.map(|page| page.txs.len())),
    }
}

#[tokio::test]
async fn test_malformed_json_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"txs\": ["))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = AccountTxsQuery::new(SENDER).unwrap();

    assert!(matches!(
        client.query_account_txs(&query).await,
        Err(HttpError::JsonError(_))
    ));
}

#[tokio::test]
async fn test_query_account_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}", SENDER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": SENDER,
            "balance": "10000 OLT"
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).await.query_account_info(SENDER).await.unwrap();

    assert_eq!(info.key, SENDER);
    assert_eq!(info.extra["balance"], "10000 OLT");
}

#[tokio::test]
async fn test_query_account_info_rejects_invalid_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .query_account_info("12312312312312312")
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<QueryError>(),
        Some(QueryError::InvalidAddress(_))
    ));
}

#[tokio::test]
async fn test_query_blocks_appends_chain_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blocks/0"))
        .and(query_param("chainID", "OneLedger-6822"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"height": 5120})))
        .expect(1)
        .mount(&server)
        .await;

    let query = BlocksQuery::at(Some("0"), Some("OneLedger-6822")).unwrap();
    let block = client_for(&server).await.query_blocks(&query).await.unwrap();

    assert_eq!(block["height"], 5120);
}

#[tokio::test]
async fn test_query_blocks_before_height() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blocks"))
        .and(query_param("beforeHeight", "100"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blocks": [], "nextPage": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = BlocksQuery::before(Some("100"), Some("20"), None).unwrap();
    let listing = client.query_blocks_before_height(&query).await.unwrap();
    assert!(listing["blocks"].as_array().unwrap().is_empty());

    let wrong_kind = BlocksQuery::at(None, None).unwrap();
    let err = client.query_blocks_before_height(&wrong_kind).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<QueryError>(),
        Some(QueryError::InvalidArgument(_))
    ));
}

#[test]
fn test_client_rejects_illegal_base_url() {
    let err = ExplorerHttpClient::new("127.0.0.1:8080").err().unwrap();
    assert!(matches!(
        err.downcast_ref::<QueryError>(),
        Some(QueryError::IllegalUrl(_))
    ));
}
