//! Tool request union and prompt construction.
//!
//! Each endpoint carries a different payload shape; this models them as one
//! closed union so validation, prompt templating and history summaries live
//! in a single place instead of five near-identical panels.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tool::ToolKind;

/// A base64-encoded image with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Base64 image bytes, passed through to the model untouched.
    pub data: String,
    /// MIME type string, e.g. "image/png".
    pub mime_type: String,
    /// Original file name, used only for history summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl InlineImage {
    /// Wraps already-encoded base64 data.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            source_name: None,
        }
    }

    /// Encodes raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(BASE64.encode(bytes), mime_type)
    }

    /// Attaches the source file name for history display.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.data.trim().is_empty() || self.mime_type.trim().is_empty()
    }
}

/// A request to one of the five tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolRequest {
    Summarize { text: String },
    Caption { image: InlineImage },
    Translate { text: String, language: String },
    ExplainCode { code: String },
    VisualQa { image: InlineImage, question: String },
}

/// A prompt ready for the generator: instruction text plus an optional
/// inline image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub image: Option<InlineImage>,
}

impl Prompt {
    /// Text-only prompt.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    /// Prompt pairing instruction text with an image.
    pub fn with_image(text: impl Into<String>, image: InlineImage) -> Self {
        Self {
            text: text.into(),
            image: Some(image),
        }
    }
}

/// A required field was absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidInput {
    /// User-facing message, e.g. "No text provided."
    pub message: &'static str,
}

impl InvalidInput {
    fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl ToolRequest {
    /// Which tool this request targets.
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::Summarize { .. } => ToolKind::Summarize,
            ToolRequest::Caption { .. } => ToolKind::Caption,
            ToolRequest::Translate { .. } => ToolKind::Translate,
            ToolRequest::ExplainCode { .. } => ToolKind::ExplainCode,
            ToolRequest::VisualQa { .. } => ToolKind::VisualQa,
        }
    }

    /// Checks that every required field is present and non-blank.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        match self {
            ToolRequest::Summarize { text } => {
                if text.trim().is_empty() {
                    return Err(InvalidInput::new("No text provided."));
                }
            }
            ToolRequest::Caption { image } => {
                if image.is_empty() {
                    return Err(InvalidInput::new("No image data provided."));
                }
            }
            ToolRequest::Translate { text, language } => {
                if text.trim().is_empty() {
                    return Err(InvalidInput::new("No text provided."));
                }
                if language.trim().is_empty() {
                    return Err(InvalidInput::new("No language provided."));
                }
            }
            ToolRequest::ExplainCode { code } => {
                if code.trim().is_empty() {
                    return Err(InvalidInput::new("No code provided."));
                }
            }
            ToolRequest::VisualQa { image, question } => {
                if image.is_empty() {
                    return Err(InvalidInput::new("No image data provided."));
                }
                if question.trim().is_empty() {
                    return Err(InvalidInput::new("No question provided."));
                }
            }
        }
        Ok(())
    }

    /// Builds the upstream prompt for this request.
    pub fn prompt(&self) -> Prompt {
        match self {
            ToolRequest::Summarize { text } => {
                Prompt::text(format!("Summarize the following text:\n\n{}", text))
            }
            ToolRequest::Caption { image } => {
                Prompt::with_image("Describe this image in detail.", image.clone())
            }
            ToolRequest::Translate { text, language } => Prompt::text(format!(
                "Translate the following text to {}: \n\n{}",
                language, text
            )),
            ToolRequest::ExplainCode { code } => Prompt::text(format!(
                "Explain this code in a simple way, line by line: \n\n```\n{}\n```",
                code
            )),
            ToolRequest::VisualQa { image, question } => {
                Prompt::with_image(question.clone(), image.clone())
            }
        }
    }

    /// The truncated input summary recorded in history.
    pub fn query_summary(&self) -> String {
        match self {
            ToolRequest::Summarize { text } => format!("{}...", truncate_chars(text, 40)),
            ToolRequest::Caption { image } => image
                .source_name
                .clone()
                .unwrap_or_else(|| image.mime_type.clone()),
            ToolRequest::Translate { text, language } => {
                format!("{}... to {}", truncate_chars(text, 25), language)
            }
            ToolRequest::ExplainCode { code } => format!("{}...", truncate_chars(code, 40)),
            ToolRequest::VisualQa { question, .. } => question.clone(),
        }
    }
}

/// Takes at most `max` characters, never splitting a code point.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
