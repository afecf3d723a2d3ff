//! Widget state modules.
//!
//! DESIGN
//! ======
//! `chat` owns the transcript, visibility, and in-flight flag; `diagnostics`
//! keeps the bounded record of failures that are hidden from the user.

pub mod chat;
pub mod diagnostics;
