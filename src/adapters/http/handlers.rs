//! HTTP handlers for the gateway endpoints.
//!
//! Every tool handler follows the same shape: map the DTO into a
//! [`ToolRequest`], validate, forward the prompt, and wrap the text in the
//! endpoint's response field. The gateway is stateless; `AppState` holds
//! only the shared generator.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::domain::ToolRequest;
use crate::ports::TextGenerator;

use super::dto::{
    CaptionRequest, CaptionResponse, ExplainCodeRequest, ExplainCodeResponse, HealthResponse,
    SummarizeRequest, SummarizeResponse, TranslateRequest, TranslateResponse, VisualQaRequest,
    VisualQaResponse,
};
use super::error::ApiError;

/// Shared state for the gateway.
#[derive(Clone)]
pub struct AppState {
    /// The upstream model (injected; a mock in tests).
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Validates a request and submits its prompt.
///
/// Upstream failures are logged with their cause and surfaced as the
/// tool's generic 500 message.
async fn invoke(state: &AppState, request: ToolRequest) -> Result<String, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::bad_request(e.message))?;

    let kind = request.kind();
    match state.generator.generate(request.prompt()).await {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::error!(tool = %kind, error = %err, "upstream generation failed");
            Err(ApiError::internal(kind.failure_message()))
        }
    }
}

/// POST /summarize
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let summary = invoke(&state, body.into()).await?;
    Ok(Json(SummarizeResponse { summary }))
}

/// POST /caption
pub async fn caption(
    State(state): State<AppState>,
    Json(body): Json<CaptionRequest>,
) -> Result<Json<CaptionResponse>, ApiError> {
    let caption = invoke(&state, body.into()).await?;
    Ok(Json(CaptionResponse { caption }))
}

/// POST /translate
pub async fn translate(
    State(state): State<AppState>,
    Json(body): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let translation = invoke(&state, body.into()).await?;
    Ok(Json(TranslateResponse { translation }))
}

/// POST /explain-code
pub async fn explain_code(
    State(state): State<AppState>,
    Json(body): Json<ExplainCodeRequest>,
) -> Result<Json<ExplainCodeResponse>, ApiError> {
    let explanation = invoke(&state, body.into()).await?;
    Ok(Json(ExplainCodeResponse { explanation }))
}

/// POST /visual-qa
pub async fn visual_qa(
    State(state): State<AppState>,
    Json(body): Json<VisualQaRequest>,
) -> Result<Json<VisualQaResponse>, ApiError> {
    let answer = invoke(&state, body.into()).await?;
    Ok(Json(VisualQaResponse { answer }))
}

/// GET / - liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let info = state.generator.info();
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "prompt-relay gateway is running".to_string(),
        model: format!("{}/{}", info.name, info.model),
        timestamp: Utc::now().to_rfc3339(),
    })
}
