//! Root chat widget: floating button, panel chrome, and the send lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the [`ChatState`] signal and the resolved [`WidgetConfig`], provides
//! both to child components, and runs the single `POST /api/ai/chat` call per
//! send. History is restored before the first render and persisted after
//! every settled request.

use leptos::prelude::*;

use super::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::net::types::ChatContext;
use crate::state::chat::{ChatState, SendOutcome};
use crate::util::host::{current_market_count, current_path, now_iso};
use crate::util::storage::platform_store;

/// Floating AI assistant mounted into the host page.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let mut initial = ChatState::default();
    initial.restore_history(platform_store().as_ref(), &config.storage_key, now_iso());
    log::debug!("chat widget restored {} messages", initial.messages.len());

    let chat = RwSignal::new(initial);
    let config = StoredValue::new(config);
    provide_context(chat);
    provide_context(config);

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let is_open = Memo::new(move |_| chat.with(ChatState::is_open));
    let pending = Memo::new(move |_| chat.with(|s| s.pending));

    Effect::new(move || {
        if !is_open.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = input_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    let send = move |text: String| -> bool {
        let context = ChatContext { page: current_path(), timestamp: now_iso(), has_markets: current_market_count() };
        let mut outcome = SendOutcome::Empty;
        chat.update(|s| outcome = s.begin_send(&text, context));
        let SendOutcome::Started(request) = outcome else {
            return false;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            let result = crate::net::api::send_chat(&config.chat_endpoint(), &request).await;
            chat.update(|s| {
                s.finish_send(result, now_iso());
                s.persist_history(platform_store().as_ref(), &config.storage_key, config.history_limit, now_iso());
            });
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;

        true
    };

    let on_pick = Callback::new(move |question: String| {
        send(question);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if send(input.get_untracked()) {
            input.set(String::new());
        }
    };

    let toggle = move |_: leptos::ev::MouseEvent| {
        chat.update(|s| {
            s.toggle();
        });
    };

    view! {
        <div id="chatWidgetButton" class="chat-widget-button" class:hidden=move || is_open.get() role="button" on:click=toggle>
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path>
            </svg>
            <span>"Ask AI"</span>
        </div>

        <div id="chatWidgetPanel" class="chat-widget-panel" class:active=move || is_open.get()>
            <div class="chat-widget-header">
                <div class="chat-header-content">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10"></circle>
                        <path d="M8 14s1.5 2 4 2 4-2 4-2"></path>
                        <line x1="9" y1="9" x2="9.01" y2="9"></line>
                        <line x1="15" y1="9" x2="15.01" y2="9"></line>
                    </svg>
                    <div>
                        <h3>"AI Assistant"</h3>
                        <span class="chat-status">"Online"</span>
                    </div>
                </div>
                <button id="chatWidgetClose" class="chat-close-btn" title="Close" on:click=toggle>
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <line x1="18" y1="6" x2="6" y2="18"></line>
                        <line x1="6" y1="6" x2="18" y2="18"></line>
                    </svg>
                </button>
            </div>

            <MessageList on_pick=on_pick/>

            <div class="chat-widget-footer">
                <form id="chatForm" class="chat-input-form" on:submit=on_submit>
                    <input
                        type="text"
                        id="chatInput"
                        class="chat-input"
                        placeholder="Ask about markets, quality scores, strategies..."
                        autocomplete="off"
                        node_ref=input_ref
                        disabled=move || pending.get()
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="chat-send-btn"
                        disabled=move || pending.get() || input.with(|text| text.trim().is_empty())
                    >
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <line x1="22" y1="2" x2="11" y2="13"></line>
                            <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                        </svg>
                    </button>
                </form>
                <div class="chat-disclaimer">"AI-generated responses may be experimental"</div>
            </div>
        </div>
    }
}
