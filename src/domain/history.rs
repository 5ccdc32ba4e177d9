//! Client-side history records.
//!
//! Entries are created only when a tool call succeeds, are never mutated,
//! and are kept most-recent-first. The list itself is unbounded; only the
//! grouped sidebar view caps what it shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tool::ToolKind;

/// Entries shown per tool group in the sidebar.
pub const SIDEBAR_GROUP_CAP: usize = 5;

/// One successful query/result pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry id.
    pub id: Uuid,
    /// Tool that produced this entry (serialized as its label).
    #[serde(rename = "type")]
    pub tool: ToolKind,
    /// Truncated input summary.
    pub query: String,
    /// Full text output.
    pub result: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
}

impl HistoryEntry {
    /// Records a successful invocation, stamped now.
    pub fn record(tool: ToolKind, query: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool,
            query: query.into(),
            result: result.into(),
            date: Utc::now(),
        }
    }
}

/// Groups entries by tool, keeping at most [`SIDEBAR_GROUP_CAP`] per group
/// and preserving the incoming (most-recent-first) order.
pub fn group_recent(entries: &[HistoryEntry]) -> Vec<(ToolKind, Vec<&HistoryEntry>)> {
    let mut groups: Vec<(ToolKind, Vec<&HistoryEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(kind, _)| *kind == entry.tool) {
            Some((_, items)) => {
                if items.len() < SIDEBAR_GROUP_CAP {
                    items.push(entry);
                }
            }
            None => groups.push((entry.tool, vec![entry])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(tool: ToolKind, query: &str) -> HistoryEntry {
        HistoryEntry::record(tool, query, "result")
    }

    #[test]
    fn record_stamps_id_and_date() {
        let a = entry(ToolKind::Summarize, "one");
        let b = entry(ToolKind::Summarize, "two");
        assert_ne!(a.id, b.id);
        assert!(a.date <= Utc::now());
    }

    #[test]
    fn serializes_with_type_tag() {
        let e = entry(ToolKind::VisualQa, "q");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "Visual Q&A");
        assert_eq!(json["query"], "q");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn group_recent_caps_each_group() {
        let entries: Vec<_> = (0..8)
            .map(|i| entry(ToolKind::Summarize, &format!("q{}", i)))
            .collect();
        let groups = group_recent(&entries);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), SIDEBAR_GROUP_CAP);
        // Most recent (first in the list) survive the cap.
        assert_eq!(groups[0].1[0].query, "q0");
        assert_eq!(groups[0].1[4].query, "q4");
    }

    #[test]
    fn group_recent_separates_tools() {
        let entries = vec![
            entry(ToolKind::Summarize, "s1"),
            entry(ToolKind::Translate, "t1"),
            entry(ToolKind::Summarize, "s2"),
        ];
        let groups = group_recent(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, ToolKind::Summarize);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, ToolKind::Translate);
    }

    #[test]
    fn group_recent_empty() {
        assert!(group_recent(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn groups_never_exceed_cap(count in 0usize..40) {
            let entries: Vec<_> = (0..count)
                .map(|i| entry(ToolKind::ALL[i % 5], &format!("q{}", i)))
                .collect();
            for (_, items) in group_recent(&entries) {
                prop_assert!(items.len() <= SIDEBAR_GROUP_CAP);
            }
        }

        #[test]
        fn grouping_preserves_relative_order(count in 0usize..20) {
            let entries: Vec<_> = (0..count)
                .map(|i| entry(ToolKind::Summarize, &format!("q{}", i)))
                .collect();
            for (_, items) in group_recent(&entries) {
                for pair in items.windows(2) {
                    let a: usize = pair[0].query[1..].parse().unwrap();
                    let b: usize = pair[1].query[1..].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
