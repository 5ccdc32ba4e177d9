//! Per-tool panel state machine.

use thiserror::Error;

use crate::domain::{InvalidInput, ToolKind, ToolRequest};

/// Why a submission was refused before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelGuard {
    /// A request for this tool is already in flight.
    #[error("a request is already pending")]
    Busy,

    /// The request belongs to a different tool's panel.
    #[error("request for {got} submitted to the {expected} panel")]
    WrongTool { expected: ToolKind, got: ToolKind },

    /// The request failed input validation.
    #[error("{0}")]
    Invalid(#[from] InvalidInput),
}

/// What a settled panel is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    Success { query: String, result: String },
    Failure { message: String },
}

/// The panel lifecycle: nothing shown, awaiting the gateway, or settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    Pending,
    Settled(PanelOutcome),
}

/// One tool's panel.
///
/// All five tools share this struct; the differences between them live in
/// [`ToolRequest`] and [`ToolKind`], not here.
#[derive(Debug, Clone)]
pub struct ToolPanel {
    kind: ToolKind,
    phase: PanelPhase,
}

impl ToolPanel {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            phase: PanelPhase::Idle,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn phase(&self) -> &PanelPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == PanelPhase::Pending
    }

    /// Accept a submission and enter `Pending`.
    ///
    /// Guards run in order: an in-flight request, a request for the wrong
    /// tool, then input validation. The phase is untouched on refusal.
    pub fn begin(&mut self, request: &ToolRequest) -> Result<(), PanelGuard> {
        if self.is_pending() {
            return Err(PanelGuard::Busy);
        }
        if request.kind() != self.kind {
            return Err(PanelGuard::WrongTool {
                expected: self.kind,
                got: request.kind(),
            });
        }
        request.validate()?;

        self.phase = PanelPhase::Pending;
        Ok(())
    }

    /// Settle a pending request with the gateway's answer.
    pub fn settle_success(&mut self, query: String, result: String) {
        self.phase = PanelPhase::Settled(PanelOutcome::Success { query, result });
    }

    /// Settle a pending request with the tool's fixed failure message.
    pub fn settle_failure(&mut self) {
        self.phase = PanelPhase::Settled(PanelOutcome::Failure {
            message: self.kind.failure_message().to_string(),
        });
    }

    /// Display a stored result directly, bypassing the pending phase.
    ///
    /// Used for history replay; a pending panel keeps its in-flight state
    /// and refuses the replay.
    pub fn show(&mut self, query: String, result: String) -> Result<(), PanelGuard> {
        if self.is_pending() {
            return Err(PanelGuard::Busy);
        }
        self.phase = PanelPhase::Settled(PanelOutcome::Success { query, result });
        Ok(())
    }

    /// Drop any settled output and return to `Idle`.
    pub fn reset(&mut self) {
        self.phase = PanelPhase::Idle;
    }
}
