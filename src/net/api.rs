//! HTTP call to the AI chat endpoint.
//!
//! Client-side (csr): real `fetch` via `gloo-net`.
//! Native builds: a stub returning [`ChatError::Unavailable`] since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The request is sent once, never retried, and has no timeout. Every
//! failure mode maps onto a [`ChatError`] so the caller can render the
//! fallback reply without caring which layer failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, ChatRequest, ChatResponse, is_truthy};
use crate::error::ChatError;

/// Turn a raw response into a reply or the error it represents.
///
/// The HTTP status only matters when the body is not JSON: a decodable body
/// is trusted whatever the status, matching what the backend sends on
/// rate-limit and validation failures.
pub fn interpret_response(status: u16, body: &str) -> Result<ChatReply, ChatError> {
    let parsed: ChatResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !(200..300).contains(&status) => return Err(ChatError::Status(status)),
        Err(e) => return Err(ChatError::Decode(e.to_string())),
    };

    if let Some(error) = parsed.error.as_ref().filter(|e| is_truthy(e)) {
        let detail = error.as_str().map_or_else(|| error.to_string(), str::to_owned);
        return Err(ChatError::Backend(detail));
    }

    let text = parsed.response.ok_or(ChatError::MissingResponse)?;
    Ok(ChatReply { text, markets: parsed.markets })
}

/// Send one question to `POST {endpoint}` and decode the reply.
///
/// # Errors
///
/// Returns a [`ChatError`] on transport failure, undecodable body, a truthy
/// `error` field, or a missing `response` field.
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(ChatError::Unavailable)
    }
}
