//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, window
//! globals, clock) and text formatting from component logic to improve reuse
//! and testability.

pub mod format;
pub mod history;
pub mod host;
pub mod storage;
