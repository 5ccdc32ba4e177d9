//! Prompt Relay - HTTP gateway for five generative-AI text tools
//!
//! This crate forwards summarize/caption/translate/explain-code/visual-qa
//! prompts to an external model and ships a headless console client with a
//! locally persisted history.

pub mod adapters;
pub mod config;
pub mod console;
pub mod domain;
pub mod ports;
