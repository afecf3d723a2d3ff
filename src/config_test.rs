use super::*;

#[test]
fn default_uses_hosted_endpoint_and_limits() {
    let config = WidgetConfig::default();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.storage_key, "am_chat_history");
    assert_eq!(config.history_limit, 20);
    assert_eq!(config.max_market_cards, 3);
}

#[test]
fn chat_endpoint_appends_api_path() {
    let config = WidgetConfig::with_api_base("https://api.example.com");
    assert_eq!(config.chat_endpoint(), "https://api.example.com/api/ai/chat");
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = WidgetConfig::with_api_base("https://api.example.com//");
    assert_eq!(config.chat_endpoint(), "https://api.example.com/api/ai/chat");
}

#[test]
fn blank_base_falls_back_to_default() {
    assert_eq!(WidgetConfig::with_api_base("   ").api_base, DEFAULT_API_BASE);
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_host_page_falls_back_outside_browser() {
    assert_eq!(WidgetConfig::from_host_page(), WidgetConfig::default());
}
