//! Domain model: the five tools, their request shapes, and the history list.

pub mod history;
pub mod prompt;
pub mod tool;

pub use history::{group_recent, HistoryEntry, SIDEBAR_GROUP_CAP};
pub use prompt::{InlineImage, InvalidInput, Prompt, ToolRequest};
pub use tool::ToolKind;
