//! The console session: five panels, one client, one history store.

use std::sync::Arc;

use crate::domain::{group_recent, HistoryEntry, ToolKind, ToolRequest};
use crate::ports::HistoryStore;

use super::client::GatewayClient;
use super::panel::{PanelGuard, ToolPanel};
use super::ConsoleError;

/// A running console.
///
/// Holds one [`ToolPanel`] per tool plus the active-tab selection. All
/// gateway and history I/O goes through [`submit`](Self::submit) and
/// [`replay`](Self::replay), so panel phases stay consistent with what
/// actually happened.
pub struct ConsoleSession {
    client: GatewayClient,
    history: Arc<dyn HistoryStore>,
    panels: Vec<ToolPanel>,
    active: ToolKind,
}

impl ConsoleSession {
    pub fn new(client: GatewayClient, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            client,
            history,
            panels: ToolKind::ALL.iter().map(|k| ToolPanel::new(*k)).collect(),
            active: ToolKind::Summarize,
        }
    }

    /// The currently selected tool tab.
    pub fn active(&self) -> ToolKind {
        self.active
    }

    /// Switch tabs. Panels keep their state across switches.
    pub fn select(&mut self, kind: ToolKind) {
        self.active = kind;
    }

    pub fn panel(&self, kind: ToolKind) -> &ToolPanel {
        self.panels
            .iter()
            .find(|p| p.kind() == kind)
            .expect("a panel exists for every tool")
    }

    fn panel_mut(&mut self, kind: ToolKind) -> &mut ToolPanel {
        self.panels
            .iter_mut()
            .find(|p| p.kind() == kind)
            .expect("a panel exists for every tool")
    }

    /// Submit a request through its tool's panel.
    ///
    /// Guard refusals return before any network I/O. On success the
    /// result is shown, recorded in history, and returned; on failure the
    /// panel shows the tool's fixed message and nothing is recorded. A
    /// history store that cannot persist is logged and otherwise ignored,
    /// the result already belongs to the caller.
    pub async fn submit(&mut self, request: ToolRequest) -> Result<String, ConsoleError> {
        let kind = request.kind();
        self.active = kind;
        self.panel_mut(kind).begin(&request)?;

        match self.client.invoke(&request).await {
            Ok(result) => {
                let query = request.query_summary();
                self.panel_mut(kind)
                    .settle_success(query.clone(), result.clone());

                let entry = HistoryEntry::record(kind, query, result.clone());
                if let Err(err) = self.history.append(entry).await {
                    tracing::warn!(tool = %kind, error = %err, "failed to persist history entry");
                }
                Ok(result)
            }
            Err(err) => {
                tracing::error!(tool = %kind, error = %err, "tool invocation failed");
                self.panel_mut(kind).settle_failure();
                Err(err)
            }
        }
    }

    /// Re-display a stored entry on its tool's panel and switch to it.
    ///
    /// No network call and no new history entry; a pending panel refuses.
    pub fn replay(&mut self, entry: &HistoryEntry) -> Result<(), PanelGuard> {
        self.panel_mut(entry.tool)
            .show(entry.query.clone(), entry.result.clone())?;
        self.active = entry.tool;
        Ok(())
    }

    /// Full history, most recent first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ConsoleError> {
        Ok(self.history.load().await?)
    }

    /// Sidebar view: entries grouped by tool, capped per group.
    pub async fn sidebar(&self) -> Result<Vec<(ToolKind, Vec<HistoryEntry>)>, ConsoleError> {
        let entries = self.history.load().await?;
        let groups = group_recent(&entries)
            .into_iter()
            .map(|(kind, items)| (kind, items.into_iter().cloned().collect()))
            .collect();
        Ok(groups)
    }

    /// Wipe the stored history. Panels are untouched.
    pub async fn clear_history(&self) -> Result<(), ConsoleError> {
        Ok(self.history.clear().await?)
    }
}
