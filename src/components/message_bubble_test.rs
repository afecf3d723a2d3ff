use super::*;

fn market(id: &str) -> MarketSummary {
    MarketSummary { market_id: id.to_owned(), question: format!("Question {id}?"), price: Some(0.5), quality: None }
}

// =============================================================
// bubble_class
// =============================================================

#[test]
fn bubble_class_distinguishes_roles() {
    let user = ChatMessage::user("hi".to_owned(), "t".to_owned());
    let assistant = ChatMessage::assistant("hello".to_owned(), None, "t".to_owned());
    assert_eq!(bubble_class(&user), "chat-message user");
    assert_eq!(bubble_class(&assistant), "chat-message assistant");
}

#[test]
fn bubble_class_marks_fallback_as_error() {
    let fallback = ChatMessage::fallback("t".to_owned());
    assert_eq!(bubble_class(&fallback), "chat-message assistant error");
}

// =============================================================
// visible_markets
// =============================================================

#[test]
fn visible_markets_keeps_first_three_in_order() {
    let markets = ["m1", "m2", "m3", "m4", "m5"].into_iter().map(market).collect();
    let ids: Vec<String> = visible_markets(Some(markets), 3).into_iter().map(|m| m.market_id).collect();
    assert_eq!(ids, ["m1", "m2", "m3"]);
}

#[test]
fn visible_markets_keeps_short_lists_whole() {
    let markets = vec![market("m1"), market("m2")];
    assert_eq!(visible_markets(Some(markets), 3).len(), 2);
}

#[test]
fn visible_markets_empty_list_renders_no_cards() {
    assert!(visible_markets(Some(Vec::new()), 3).is_empty());
}

#[test]
fn visible_markets_absent_list_renders_no_cards() {
    assert!(visible_markets(None, 3).is_empty());
}
