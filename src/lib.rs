//! # market-chat-widget
//!
//! Leptos + WASM floating chat assistant for the prediction-markets site.
//!
//! The widget mounts itself into the host page body, forwards questions to
//! the AI chat endpoint, renders replies with related market cards, and keeps
//! a bounded transcript in `localStorage` between page loads.
//!
//! Browser glue lives behind the `csr` feature. Without it the state,
//! wire types, and formatting helpers compile natively so they can be unit
//! tested with plain `cargo test`.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

pub use components::chat_widget::ChatWidget;
pub use config::WidgetConfig;
pub use error::ChatError;

/// Browser entry point: installs logging and mounts the widget into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = WidgetConfig::from_host_page();
    log::info!("chat widget mounting: api_base={}", config.api_base);
    leptos::mount::mount_to_body(move || leptos::view! { <ChatWidget config=config.clone()/> });
}
