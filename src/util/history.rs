//! Persisted transcript encode/decode.
//!
//! The stored value is a bare JSON array of messages with no version field.
//! A shape that no longer decodes is reported as corrupt and the caller
//! starts from an empty history.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use super::storage::KeyValueStore;
use crate::error::ChatError;
use crate::state::chat::ChatMessage;

/// The trailing `limit` messages of `messages`, in original order.
#[must_use]
pub fn recent(messages: &[ChatMessage], limit: usize) -> &[ChatMessage] {
    &messages[messages.len().saturating_sub(limit)..]
}

/// Load the stored transcript under `key`; empty when nothing is stored.
///
/// # Errors
///
/// Returns a [`ChatError`] when the store cannot be read or the stored JSON
/// does not decode.
pub fn load_history(store: &dyn KeyValueStore, key: &str) -> Result<Vec<ChatMessage>, ChatError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| ChatError::CorruptHistory(e.to_string()))
}

/// Store the last `limit` messages under `key`.
///
/// # Errors
///
/// Returns a [`ChatError`] when encoding fails or the store rejects the write.
pub fn save_history(store: &dyn KeyValueStore, key: &str, messages: &[ChatMessage], limit: usize) -> Result<(), ChatError> {
    let raw = serde_json::to_string(recent(messages, limit)).map_err(|e| ChatError::EncodeHistory(e.to_string()))?;
    store.set_item(key, &raw)
}
