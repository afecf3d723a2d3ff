//! Networking for the AI chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /api/ai/chat` call and classifies its
//! outcome; `types` defines the request/response schema.

pub mod api;
pub mod types;
