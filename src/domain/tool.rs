//! The closed set of tools the gateway fronts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five supported tools.
///
/// Serializes as the display label so history entries keep the tags the
/// console groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[serde(rename = "Summarizer")]
    Summarize,
    #[serde(rename = "Captioner")]
    Caption,
    #[serde(rename = "Translator")]
    Translate,
    #[serde(rename = "Code Explainer")]
    ExplainCode,
    #[serde(rename = "Visual Q&A")]
    VisualQa,
}

impl ToolKind {
    /// All tools, in sidebar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Summarize,
        ToolKind::Caption,
        ToolKind::Translate,
        ToolKind::ExplainCode,
        ToolKind::VisualQa,
    ];

    /// Gateway route for this tool.
    pub fn route(&self) -> &'static str {
        match self {
            ToolKind::Summarize => "/summarize",
            ToolKind::Caption => "/caption",
            ToolKind::Translate => "/translate",
            ToolKind::ExplainCode => "/explain-code",
            ToolKind::VisualQa => "/visual-qa",
        }
    }

    /// JSON field carrying the model output on success.
    pub fn response_field(&self) -> &'static str {
        match self {
            ToolKind::Summarize => "summary",
            ToolKind::Caption => "caption",
            ToolKind::Translate => "translation",
            ToolKind::ExplainCode => "explanation",
            ToolKind::VisualQa => "answer",
        }
    }

    /// Display label, also the history type tag.
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Summarize => "Summarizer",
            ToolKind::Caption => "Captioner",
            ToolKind::Translate => "Translator",
            ToolKind::ExplainCode => "Code Explainer",
            ToolKind::VisualQa => "Visual Q&A",
        }
    }

    /// The uniform message shown when the upstream call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ToolKind::Summarize => "Failed to summarize text.",
            ToolKind::Caption => "Failed to generate caption.",
            ToolKind::Translate => "Failed to translate text.",
            ToolKind::ExplainCode => "Failed to explain code.",
            ToolKind::VisualQa => "Failed to get answer.",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
