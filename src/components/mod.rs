//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns state and the send lifecycle; the other components
//! read that state from Leptos context and render it.

pub mod chat_widget;
pub mod message_bubble;
pub mod message_list;
pub mod welcome;
