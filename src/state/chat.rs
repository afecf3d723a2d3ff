//! Transcript and visibility state for the chat widget.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on [`ChatState`] so the send/receive
//! lifecycle can be exercised without a browser. Components hold the state
//! in a signal and call these methods inside `update` closures.
//!
//! Sends are serialized: while a request is pending, further sends are
//! rejected, so the typing indicator and replies always pair up in order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use super::diagnostics::{DiagnosticSource, Diagnostics};
use crate::error::ChatError;
use crate::net::types::{ChatContext, ChatReply, ChatRequest, MarketSummary};
use crate::util::history;
use crate::util::storage::KeyValueStore;

/// Reply shown whenever the chat request fails, whatever the cause.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again or browse the markets directly.";

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "new_message_id")]
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub markets: Option<Vec<MarketSummary>>,
    /// RFC 3339 creation time.
    #[serde(default)]
    pub timestamp: String,
    /// Fallback reply rendered with the error style.
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

impl ChatMessage {
    fn new(role: Role, content: String, markets: Option<Vec<MarketSummary>>, timestamp: String, error: bool) -> Self {
        Self { id: new_message_id(), role, content, markets, timestamp, error }
    }

    #[must_use]
    pub fn user(content: String, timestamp: String) -> Self {
        Self::new(Role::User, content, None, timestamp, false)
    }

    #[must_use]
    pub fn assistant(content: String, markets: Option<Vec<MarketSummary>>, timestamp: String) -> Self {
        Self::new(Role::Assistant, content, markets, timestamp, false)
    }

    /// The fixed fallback reply, flagged as an error.
    #[must_use]
    pub fn fallback(timestamp: String) -> Self {
        Self::new(Role::Assistant, FALLBACK_REPLY.to_owned(), None, timestamp, true)
    }
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Visibility of the floating panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Result of asking the widget to send a message.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome {
    /// The user message was appended; this request should now be sent.
    Started(ChatRequest),
    /// Input was empty after trimming; nothing happened.
    Empty,
    /// A request is already in flight; nothing happened.
    Busy,
}

/// State for the chat widget, owned by the root component.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub visibility: Visibility,
    pub messages: Vec<ChatMessage>,
    /// A request is in flight; drives the typing indicator.
    pub pending: bool,
    pub diagnostics: Diagnostics,
}

impl ChatState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Flip the panel open/closed and return the new visibility.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// The welcome block with suggested questions shows until the first message.
    #[must_use]
    pub fn show_welcome(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append the user message for `raw` and build the request to send.
    ///
    /// `context` supplies the page context; its timestamp also stamps the
    /// user message.
    pub fn begin_send(&mut self, raw: &str, context: ChatContext) -> SendOutcome {
        let message = raw.trim();
        if message.is_empty() {
            return SendOutcome::Empty;
        }
        if self.pending {
            log::debug!("chat send rejected: request already in flight");
            return SendOutcome::Busy;
        }

        self.messages.push(ChatMessage::user(message.to_owned(), context.timestamp.clone()));
        self.pending = true;
        SendOutcome::Started(ChatRequest { message: message.to_owned(), context })
    }

    /// Settle the in-flight request with its outcome.
    pub fn finish_send(&mut self, result: Result<ChatReply, ChatError>, timestamp: String) {
        self.pending = false;
        match result {
            Ok(reply) => self.messages.push(ChatMessage::assistant(reply.text, reply.markets, timestamp)),
            Err(error) => {
                self.diagnostics.record(DiagnosticSource::Chat, error, timestamp.clone());
                self.messages.push(ChatMessage::fallback(timestamp));
            }
        }
    }

    /// Replace the transcript with the stored history, leaving it untouched on failure.
    pub fn restore_history(&mut self, store: &dyn KeyValueStore, key: &str, timestamp: String) {
        match history::load_history(store, key) {
            Ok(messages) => self.messages = messages,
            Err(error) => self.diagnostics.record(DiagnosticSource::HistoryLoad, error, timestamp),
        }
    }

    /// Persist the most recent `limit` messages; failures are only recorded.
    pub fn persist_history(&mut self, store: &dyn KeyValueStore, key: &str, limit: usize, timestamp: String) {
        if let Err(error) = history::save_history(store, key, &self.messages, limit) {
            self.diagnostics.record(DiagnosticSource::HistorySave, error, timestamp);
        }
    }
}
