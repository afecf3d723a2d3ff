//! Text and number formatting for rendered messages and market cards.
//!
//! `format_message` is the only place that produces HTML from remote text.
//! It recognizes `**bold**`, `*italic*`, and newlines and nothing else: links,
//! images, headings, lists, code, and raw HTML all stay literal text. The
//! recognized spans become `pulldown-cmark` events so the HTML writer does the
//! escaping.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use pulldown_cmark::{Event, Tag, TagEnd, html};
use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("BOLD_RE is a valid static regex pattern"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("ITALIC_RE is a valid static regex pattern"));

/// Render `**bold**`, `*italic*`, and line breaks; escape everything else.
#[must_use]
pub fn format_message(text: &str) -> String {
    let mut events = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            events.push(Event::HardBreak);
        }
        push_bold(&mut events, line);
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out.trim_end_matches('\n').to_owned()
}

/// Bold spans first; italics apply inside and between them.
fn push_bold<'a>(events: &mut Vec<Event<'a>>, line: &'a str) {
    let mut last = 0;
    for caps in BOLD_RE.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_italic(events, &line[last..whole.start()]);
        events.push(Event::Start(Tag::Strong));
        push_italic(events, inner.as_str());
        events.push(Event::End(TagEnd::Strong));
        last = whole.end();
    }
    push_italic(events, &line[last..]);
}

fn push_italic<'a>(events: &mut Vec<Event<'a>>, segment: &'a str) {
    let mut last = 0;
    for caps in ITALIC_RE.captures_iter(segment) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(events, &segment[last..whole.start()]);
        events.push(Event::Start(Tag::Emphasis));
        push_text(events, inner.as_str());
        events.push(Event::End(TagEnd::Emphasis));
        last = whole.end();
    }
    push_text(events, &segment[last..]);
}

fn push_text<'a>(events: &mut Vec<Event<'a>>, text: &'a str) {
    if !text.is_empty() {
        events.push(Event::Text(text.into()));
    }
}

/// Price as a whole percentage; a missing price reads as even odds.
#[must_use]
pub fn price_label(price: Option<f64>) -> String {
    let percent = (price.unwrap_or(0.5) * 100.0).round();
    format!("{percent:.0}%")
}

/// Quality score line for a market card.
#[must_use]
pub fn quality_label(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("Quality: {:.0}", score.round()),
        None => "Quality: N/A".to_owned(),
    }
}

/// In-page anchor for a market on the markets index.
#[must_use]
pub fn market_href(market_id: &str) -> String {
    format!("index.html#market-{market_id}")
}

/// `HH:MM` for an RFC 3339 timestamp; anything unparseable is shown as-is.
#[must_use]
pub fn display_time(timestamp: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return timestamp.to_owned();
        }
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        use time::OffsetDateTime;
        use time::format_description::well_known::Rfc3339;

        match OffsetDateTime::parse(timestamp, &Rfc3339) {
            Ok(at) => format!("{:02}:{:02}", at.hour(), at.minute()),
            Err(_) => timestamp.to_owned(),
        }
    }
}
