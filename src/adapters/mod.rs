//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod ai;
pub mod history;
pub mod http;
