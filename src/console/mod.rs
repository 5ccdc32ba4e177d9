//! Tool Console - headless client for the gateway.
//!
//! Mirrors the browser app this replaces: one panel per tool with an
//! idle/pending/settled state machine, an HTTP client, and an injected
//! history store that records successful invocations for replay.

mod client;
mod panel;
mod session;

pub use client::{base_url_for, GatewayClient, DEV_BASE_URL};
pub use panel::{PanelGuard, PanelOutcome, PanelPhase, ToolPanel};
pub use session::ConsoleSession;

use thiserror::Error;

use crate::ports::HistoryStoreError;

/// Console-side failures.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Submission blocked before any network I/O.
    #[error(transparent)]
    Guard(#[from] PanelGuard),

    /// Network-level failure talking to the gateway.
    #[error("transport error: {0}")]
    Transport(String),

    /// The gateway answered with an error body.
    #[error("gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },

    /// The gateway answered 200 but without the documented field.
    #[error("response missing field `{0}`")]
    MalformedResponse(&'static str),

    /// The history store failed.
    #[error(transparent)]
    History(#[from] HistoryStoreError),

    /// Production console started without a gateway URL.
    #[error("no gateway base URL configured for production")]
    MissingBaseUrl,
}
