//! Wire DTOs for the AI chat endpoint.
//!
//! DESIGN
//! ======
//! The market payload is owned by the backend, so decoding is lenient:
//! unknown fields are ignored and numeric fields accept numbers or numeric
//! strings. Only the fields the widget renders are modelled.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /api/ai/chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

/// Page context sent alongside each question.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatContext {
    /// Current page path (`location.pathname`).
    pub page: String,
    /// ISO-8601 time the request was built.
    pub timestamp: String,
    /// Number of markets the host page currently displays, 0 if unknown.
    #[serde(rename = "hasMarkets")]
    pub has_markets: u32,
}

/// Raw response body from the chat endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub markets: Option<Vec<MarketSummary>>,
    /// Backend-reported failure; any truthy JSON value counts.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Successful reply extracted from a [`ChatResponse`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub markets: Option<Vec<MarketSummary>>,
}

/// Market summary attached to an assistant reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub market_id: String,
    #[serde(default)]
    pub question: String,
    /// Implied probability in `0.0..=1.0`.
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub price: Option<f64>,
    #[serde(default)]
    pub quality: Option<MarketQuality>,
}

/// Quality block of a market summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuality {
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub total_score: Option<f64>,
}

impl MarketSummary {
    /// Quality score if the backend supplied one.
    #[must_use]
    pub fn quality_score(&self) -> Option<f64> {
        self.quality.as_ref().and_then(|q| q.total_score)
    }
}

/// JavaScript-style truthiness for the `error` field.
#[must_use]
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_optional_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => Ok(number.as_f64().filter(|f| f.is_finite())),
        Some(serde_json::Value::String(s)) => Ok(s.trim().parse::<f64>().ok().filter(|f| f.is_finite())),
        Some(_) => Err(D::Error::custom("expected number or numeric string")),
    }
}
