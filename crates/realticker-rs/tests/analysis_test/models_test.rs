use realticker_rs::analysis::models::*;
#[test]


fn test_stock_analysis_deserialization() {
    let json = r#"{"ticker":"AAPL","trend":"Upward","risk_level":"Medium","suggested_action":"Long-term investment","explanation":"Price changed 12.4% over 6 months.","disclaimer":"This is AI-generated analysis and not financial advice."}"#;
    let analysis: StockAnalysis = serde_json::from_str(json).unwrap();
    assert_eq!(analysis.trend, "Upward");
    assert_eq!(
        analysis.explanation.as_deref(),
        Some("Price changed 12.4% over 6 months.")
    );
}
#[test]


fn test_stock_analysis_without_explanation() {
    let json = r#"{"ticker":"AAPL","trend":"Sideways","risk_level":"Low","suggested_action":"Short-term watch","disclaimer":"Not financial advice."}"#;
    let analysis: StockAnalysis = serde_json::from_str(json).unwrap();
    assert_eq!(analysis.explanation, None);
}
#[test]


fn test_stock_analysis_display() {
    let json = r#"{"ticker":"AAPL","trend":"Upward","risk_level":"High","suggested_action":"Avoid","disclaimer":"n/a"}"#;
    let analysis: StockAnalysis = serde_json::from_str(json).unwrap();
    assert_eq!(
        analysis.to_string(),
        "AAPL: trend Upward, risk High, action Avoid"
    );
}
