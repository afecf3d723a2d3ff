//! A single transcript entry and its market cards.
//!
//! Message text is rendered through [`format_message`], which escapes any
//! markup in the remote text. Market fields go through plain text nodes.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::types::MarketSummary;
use crate::state::chat::{ChatMessage, Role};
use crate::util::format::{display_time, format_message, market_href, price_label, quality_label};
use crate::util::host::navigate;

fn bubble_class(message: &ChatMessage) -> String {
    let role = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    if message.error { format!("chat-message {role} error") } else { format!("chat-message {role}") }
}

/// The first `limit` markets of a reply, in reply order.
fn visible_markets(markets: Option<Vec<MarketSummary>>, limit: usize) -> Vec<MarketSummary> {
    let mut markets = markets.unwrap_or_default();
    markets.truncate(limit);
    markets
}

/// Rendered chat message with optional market cards and a time footer.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let limit = config.with_value(|c| c.max_market_cards);

    let class = bubble_class(&message);
    let text_html = format_message(&message.content);
    let time = display_time(&message.timestamp);
    let markets = visible_markets(message.markets, limit);

    view! {
        <div class=class>
            <div class="message-content">
                <div class="message-text" inner_html=text_html></div>
                <MarketCards markets=markets/>
            </div>
            <div class="message-time">{time}</div>
        </div>
    }
}

/// Clickable market cards; renders nothing for an empty list.
#[component]
pub fn MarketCards(markets: Vec<MarketSummary>) -> impl IntoView {
    (!markets.is_empty()).then(|| {
        view! {
            <div class="chat-markets">
                {markets
                    .into_iter()
                    .map(|market| view! { <MarketCard market=market/> })
                    .collect_view()}
            </div>
        }
    })
}

/// One market card; clicking jumps to the market on the index page.
#[component]
pub fn MarketCard(market: MarketSummary) -> impl IntoView {
    let href = market_href(&market.market_id);
    let price = price_label(market.price);
    let quality = quality_label(market.quality_score());

    view! {
        <div class="chat-market-card" role="link" tabindex="0" on:click=move |_| navigate(&href)>
            <div class="chat-market-title">{market.question}</div>
            <div class="chat-market-stats">
                <span>{price}</span>
                <span>{quality}</span>
            </div>
        </div>
    }
}
