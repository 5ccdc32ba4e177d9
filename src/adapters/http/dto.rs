//! Data transfer objects for the gateway endpoints.
//!
//! Required fields are `Option` on purpose: an absent field and an empty
//! one get the same 400 message, so presence checks happen in validation
//! rather than in serde.

use serde::{Deserialize, Serialize};

use crate::domain::{InlineImage, ToolRequest};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// POST /summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: Option<String>,
}

/// POST /caption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    pub image: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// POST /translate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub language: Option<String>,
}

/// POST /explain-code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainCodeRequest {
    pub code: Option<String>,
}

/// POST /visual-qa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualQaRequest {
    pub image: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub question: Option<String>,
}

impl From<SummarizeRequest> for ToolRequest {
    fn from(dto: SummarizeRequest) -> Self {
        ToolRequest::Summarize {
            text: dto.text.unwrap_or_default(),
        }
    }
}

impl From<CaptionRequest> for ToolRequest {
    fn from(dto: CaptionRequest) -> Self {
        ToolRequest::Caption {
            image: InlineImage::new(
                dto.image.unwrap_or_default(),
                dto.mime_type.unwrap_or_default(),
            ),
        }
    }
}

impl From<TranslateRequest> for ToolRequest {
    fn from(dto: TranslateRequest) -> Self {
        ToolRequest::Translate {
            text: dto.text.unwrap_or_default(),
            language: dto.language.unwrap_or_default(),
        }
    }
}

impl From<ExplainCodeRequest> for ToolRequest {
    fn from(dto: ExplainCodeRequest) -> Self {
        ToolRequest::ExplainCode {
            code: dto.code.unwrap_or_default(),
        }
    }
}

impl From<VisualQaRequest> for ToolRequest {
    fn from(dto: VisualQaRequest) -> Self {
        ToolRequest::VisualQa {
            image: InlineImage::new(
                dto.image.unwrap_or_default(),
                dto.mime_type.unwrap_or_default(),
            ),
            question: dto.question.unwrap_or_default(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainCodeResponse {
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualQaResponse {
    pub answer: String,
}

/// Uniform error body for 400s and 500s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET / liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub model: String,
    pub timestamp: String,
}
