//! Scrolling transcript body: welcome block, messages, typing indicator.

use leptos::prelude::*;

use super::message_bubble::MessageBubble;
use super::welcome::Welcome;
use crate::state::chat::{ChatMessage, ChatState};

/// Message list for the widget panel.
///
/// `on_pick` receives the question behind a clicked suggestion.
#[component]
pub fn MessageList(on_pick: Callback<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.with(|s| {
            let _ = s.messages.len();
            let _ = s.pending;
        });

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-widget-body" id="chatMessages" node_ref=messages_ref>
            <Show when=move || chat.with(ChatState::show_welcome)>
                <Welcome on_pick=on_pick/>
            </Show>

            <For
                each=move || chat.with(|s| s.messages.clone())
                key=|message: &ChatMessage| message.id.clone()
                children=move |message: ChatMessage| view! { <MessageBubble message=message/> }
            />

            <Show when=move || chat.with(|s| s.pending)>
                <div id="typingIndicator" class="chat-message assistant typing">
                    <div class="message-content">
                        <div class="typing-dots">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
