use crate::common::setup_client;

const ANALYSIS_BODY: &str = r#"{
    "ticker":"AAPL",
    "trend":"Upward",
    "risk_level":"Medium",
    "suggested_action":"Long-term investment",
    "explanation":"Price changed 8.2% over 6 months. Volatility metric 0.031.",
    "disclaimer":"This is AI-generated analysis and not financial advice."
}"#;

/// =============================================================================
/// ANALYSIS TRIGGER TESTS
/// =============================================================================
#[tokio::test]
async fn test_analyze_stock() {
    let client = setup_client(vec![("POST", "/api/stocks/AAPL/analyze", 200, ANALYSIS_BODY)]).await;
    let result = client.analyze_stock("AAPL").await;
    assert!(result.is_ok(), "Failed to analyze stock: {:?}", result.err());
    let analysis = result.unwrap();
    assert_eq!(analysis.ticker, "AAPL");
    assert_eq!(analysis.suggested_action, "Long-term investment");
    assert!(analysis.explanation.is_some());
}
#[tokio::test]
async fn test_analyze_stock_uses_post() {
    // The analyze route only answers POST; a client issuing GET would 404.
    let client = setup_client(vec![("POST", "/api/stocks/TSLA/analyze", 200, ANALYSIS_BODY)]).await;
    let result = client.analyze_stock("TSLA").await;
    assert!(result.is_ok(), "analyze must go over POST: {:?}", result.err());
}
#[tokio::test]
async fn test_analyze_stock_unknown_ticker_is_an_error() {
    let client = setup_client(vec![]).await;
    let result = client.analyze_stock("NOPE").await;
    let err = result.expect_err("404 must not decode as an analysis");
    assert!(err.to_string().contains("404"), "unexpected error: {err}");
}
