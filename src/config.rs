//! Widget configuration resolved from the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may define a global `API_BASE` string before the widget
//! loads. When it is missing or blank the hosted default endpoint is used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when the host page does not define `API_BASE`.
pub const DEFAULT_API_BASE: &str = "https://postposted-spent-knife-given.trycloudflare.com";

/// `localStorage` key holding the persisted transcript.
pub const HISTORY_STORAGE_KEY: &str = "am_chat_history";

/// Number of most recent messages kept on every persist.
pub const HISTORY_LIMIT: usize = 20;

/// Maximum market cards rendered under one assistant reply.
pub const MAX_MARKET_CARDS: usize = 3;

/// Path of the chat endpoint relative to the API base.
const CHAT_PATH: &str = "/api/ai/chat";

/// Runtime settings for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL of the AI backend, without a trailing slash.
    pub api_base: String,
    pub storage_key: String,
    pub history_limit: usize,
    pub max_market_cards: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

impl WidgetConfig {
    /// Build a config for `api_base`, falling back to the default when blank.
    #[must_use]
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            storage_key: HISTORY_STORAGE_KEY.to_owned(),
            history_limit: HISTORY_LIMIT,
            max_market_cards: MAX_MARKET_CARDS,
        }
    }

    /// Resolve the config from the host page's `API_BASE` global.
    pub fn from_host_page() -> Self {
        match crate::util::host::api_base_override() {
            Some(base) => Self::with_api_base(&base),
            None => Self::default(),
        }
    }

    /// Full URL of the chat endpoint.
    #[must_use]
    pub fn chat_endpoint(&self) -> String {
        format!("{}{CHAT_PATH}", self.api_base)
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE.to_owned() } else { trimmed.to_owned() }
}
