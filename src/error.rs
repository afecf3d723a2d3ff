//! Error taxonomy for the widget's fallible edges.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught at its call site. Network and backend failures
//! collapse into one fixed user-facing fallback reply; storage failures stay
//! silent to the user. Both are logged and recorded as diagnostics.

/// Failure while talking to the AI endpoint or the browser storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("chat request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status and a body that was not JSON.
    #[error("chat request failed with status {0}")]
    Status(u16),
    /// The response body could not be decoded as JSON.
    #[error("chat response was not valid JSON: {0}")]
    Decode(String),
    /// The backend reported a logical error in the `error` field.
    #[error("chat backend error: {0}")]
    Backend(String),
    /// The response decoded but carried no `response` text.
    #[error("chat response missing `response` field")]
    MissingResponse,
    /// No `localStorage` is reachable from this window.
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// A `localStorage` read or write threw (quota, privacy mode, ...).
    #[error("local storage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },
    /// The stored history was present but did not decode.
    #[error("stored chat history is corrupt: {0}")]
    CorruptHistory(String),
    /// The history could not be encoded for storage.
    #[error("failed to encode chat history: {0}")]
    EncodeHistory(String),
    /// Browser-only operation invoked outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ChatError {
    /// Whether this failure belongs to the storage path (silent to the user).
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable | Self::Storage { .. } | Self::CorruptHistory(_) | Self::EncodeHistory(_)
        )
    }
}
