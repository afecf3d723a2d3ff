use super::*;

// =============================================================
// ChatRequest serde
// =============================================================

#[test]
fn chat_request_serializes_camel_case_context() {
    let request = ChatRequest {
        message: "What are the best markets right now?".to_owned(),
        context: ChatContext { page: "/index.html".to_owned(), timestamp: "2026-01-02T03:04:05Z".to_owned(), has_markets: 12 },
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "message": "What are the best markets right now?",
            "context": { "page": "/index.html", "timestamp": "2026-01-02T03:04:05Z", "hasMarkets": 12 }
        })
    );
}

// =============================================================
// ChatResponse decoding
// =============================================================

#[test]
fn chat_response_decodes_reply_with_markets() {
    let body = r#"{
        "response": "Here you go",
        "markets": [{ "market_id": "m1", "question": "Q1", "price": 0.73, "quality": { "total_score": 82 } }]
    }"#;
    let resp: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.response.as_deref(), Some("Here you go"));
    let markets = resp.markets.unwrap();
    assert_eq!(markets[0].market_id, "m1");
    assert_eq!(markets[0].price, Some(0.73));
    assert_eq!(markets[0].quality_score(), Some(82.0));
    assert!(resp.error.is_none());
}

#[test]
fn chat_response_tolerates_missing_fields() {
    let resp: ChatResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.response.is_none());
    assert!(resp.markets.is_none());
    assert!(resp.error.is_none());
}

// =============================================================
// MarketSummary leniency
// =============================================================

#[test]
fn market_summary_accepts_numeric_strings_and_numeric_ids() {
    let market: MarketSummary =
        serde_json::from_str(r#"{ "market_id": 42, "question": "Q", "price": "0.4", "quality": { "total_score": "77.5" } }"#)
            .unwrap();
    assert_eq!(market.market_id, "42");
    assert_eq!(market.price, Some(0.4));
    assert_eq!(market.quality_score(), Some(77.5));
}

#[test]
fn market_summary_without_quality_has_no_score() {
    let market: MarketSummary = serde_json::from_str(r#"{ "market_id": "m2", "question": "Q2" }"#).unwrap();
    assert_eq!(market.price, None);
    assert_eq!(market.quality_score(), None);
}

#[test]
fn market_summary_with_empty_quality_has_no_score() {
    let market: MarketSummary =
        serde_json::from_str(r#"{ "market_id": "m3", "question": "Q3", "quality": {}, "volume": 1000 }"#).unwrap();
    assert_eq!(market.quality_score(), None);
}

#[test]
fn market_summary_null_price_is_none() {
    let market: MarketSummary = serde_json::from_str(r#"{ "market_id": "m4", "price": null }"#).unwrap();
    assert_eq!(market.price, None);
    assert_eq!(market.question, "");
}

// =============================================================
// Truthiness
// =============================================================

#[test]
fn is_truthy_matches_javascript_semantics() {
    assert!(is_truthy(&serde_json::json!("rate limited")));
    assert!(is_truthy(&serde_json::json!(true)));
    assert!(is_truthy(&serde_json::json!(1)));
    assert!(is_truthy(&serde_json::json!({})));
    assert!(is_truthy(&serde_json::json!([])));
    assert!(!is_truthy(&serde_json::json!("")));
    assert!(!is_truthy(&serde_json::json!(false)));
    assert!(!is_truthy(&serde_json::json!(0)));
    assert!(!is_truthy(&serde_json::Value::Null));
}
