use crate::common::setup_client;
use realticker_rs::RealtickerError;
use realticker_rs::stocks::models::{RankBy, TopStocksQuery};

const TOP10_BODY: &str = r#"[
    {"ticker":"AAPL","company":"Apple Inc.","price":231.41,"change":0.52,"volume":51230000,"market_cap":3450000000000},
    {"ticker":"NVDA","company":"NVIDIA Corp.","price":128.30,"change":-1.10,"volume":44110000,"market_cap":3160000000000}
]"#;

const AAPL_HISTORY_BODY: &str = r#"{"ticker":"AAPL","history":[
    {"date":"2025-12-30","price":229.10},
    {"date":"2025-12-31","price":230.00},
    {"date":"2026-01-30","price":231.41}
]}"#;

/// =============================================================================
/// TOP-10 LISTING TESTS
/// =============================================================================
#[tokio::test]
async fn test_get_top_stocks() {
    let client = setup_client(vec![("GET", "/api/stocks/top10", 200, TOP10_BODY)]).await;
    let result = client
        .get_top_stocks(&TopStocksQuery {
            by: Some(RankBy::Volume),
        })
        .await;
    assert!(result.is_ok(), "Failed to get top stocks: {:?}", result.err());
    let stocks = result.unwrap();
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].ticker, "AAPL");
    assert_eq!(stocks[1].volume, 44_110_000);
}
/// =============================================================================
/// HISTORY TESTS
/// =============================================================================
#[tokio::test]
async fn test_get_stock_history() {
    let client =
        setup_client(vec![("GET", "/api/stocks/AAPL/history", 200, AAPL_HISTORY_BODY)]).await;
    let result = client.get_stock_history("AAPL").await;
    assert!(result.is_ok(), "Failed to get history: {:?}", result.err());
    let resp = result.unwrap();
    assert_eq!(resp.ticker, "AAPL");
    assert_eq!(resp.history.len(), 3);
    assert!(resp.history.windows(2).all(|w| w[0].date < w[1].date));
}
#[tokio::test]
async fn test_get_stock_history_unknown_ticker_is_an_error() {
    let client = setup_client(vec![]).await;
    let result = client.get_stock_history("NOPE").await;
    let err = result.expect_err("404 must not decode as a history response");
    assert!(err.to_string().contains("404"), "unexpected error: {err}");
}
#[tokio::test]
async fn test_get_stock_history_rejects_negative_price() {
    let body = r#"{"ticker":"BAD","history":[{"date":"2026-01-30","price":-3.5}]}"#;
    let client = setup_client(vec![("GET", "/api/stocks/BAD/history", 200, body)]).await;
    let result = client.get_stock_history("BAD").await;
    assert!(
        matches!(result, Err(RealtickerError::InvalidData(_))),
        "negative price must fail as invalid data: {result:?}"
    );
}
#[tokio::test]
async fn test_get_stock_history_rejects_malformed_date() {
    let body = r#"{"ticker":"BAD","history":[{"date":"not-a-date","price":3.5}]}"#;
    let client = setup_client(vec![("GET", "/api/stocks/BAD/history", 200, body)]).await;
    let result = client.get_stock_history("BAD").await;
    assert!(
        matches!(result, Err(RealtickerError::ParseError(_))),
        "malformed date must fail as a parse error: {result:?}"
    );
}
