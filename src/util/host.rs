//! Host page globals and clock access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is embedded into pages it does not own. They may expose
//! `API_BASE` (backend URL) and `currentMarkets` (the markets on screen) as
//! window globals; both are optional. Native builds return the fallbacks so
//! state code stays testable.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Read the host page's `API_BASE` global, if it is a string.
pub fn api_base_override() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        window_global("API_BASE")?.as_string()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Count of markets the host page currently shows, 0 when unknown.
///
/// Accepts an array-like `currentMarkets` (its `length`) or a plain number.
pub fn current_market_count() -> u32 {
    #[cfg(feature = "csr")]
    {
        let Some(value) = window_global("currentMarkets") else {
            return 0;
        };
        let raw = if let Some(n) = value.as_f64() {
            Some(n)
        } else {
            js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("length"))
                .ok()
                .and_then(|len| len.as_f64())
        };
        raw.map_or(0, market_count_from_f64)
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Path of the current page (`location.pathname`), `/` off-browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Current UTC time as an RFC 3339 string.
pub fn now_iso() -> String {
    format_iso(OffsetDateTime::now_utc())
}

/// Format a timestamp as RFC 3339, empty on the (unreachable) format error.
pub fn format_iso(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}

/// Navigate the page to `href`.
pub fn navigate(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::warn!("chat widget navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn market_count_from_f64(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 { raw.min(f64::from(u32::MAX)) as u32 } else { 0 }
}

#[cfg(feature = "csr")]
fn window_global(name: &str) -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() { None } else { Some(value) }
}
