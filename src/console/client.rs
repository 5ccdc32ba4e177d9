//! HTTP client for the Request Gateway.

use std::time::Duration;

use serde_json::{json, Value};

use crate::config::Environment;
use crate::domain::ToolRequest;

use super::ConsoleError;

/// Default gateway address during development.
pub const DEV_BASE_URL: &str = "http://localhost:8080";

const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);

/// Resolve the gateway base URL for an environment.
///
/// Development falls back to [`DEV_BASE_URL`]; production has no sensible
/// fallback and requires an explicit URL.
pub fn base_url_for(
    environment: Environment,
    explicit: Option<String>,
) -> Result<String, ConsoleError> {
    match environment {
        Environment::Development => Ok(explicit.unwrap_or_else(|| DEV_BASE_URL.to_string())),
        Environment::Production => explicit.ok_or(ConsoleError::MissingBaseUrl),
    }
}

/// Thin wrapper over the gateway's five endpoints.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to its endpoint and extract the documented field.
    ///
    /// Non-2xx answers surface the body's `error` message; a 200 without
    /// the expected field is malformed.
    pub async fn invoke(&self, request: &ToolRequest) -> Result<String, ConsoleError> {
        let kind = request.kind();
        let url = format!("{}{}", self.base_url, kind.route());

        let response = self
            .http
            .post(&url)
            .json(&wire_payload(request))
            .send()
            .await
            .map_err(|e| ConsoleError::Transport(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ConsoleError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string();
            return Err(ConsoleError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        body.get(kind.response_field())
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ConsoleError::MalformedResponse(kind.response_field()))
    }
}

/// Build the endpoint's JSON body.
///
/// Image fields use the gateway's `mimeType` spelling; the file name used
/// for history summaries never goes over the wire.
fn wire_payload(request: &ToolRequest) -> Value {
    match request {
        ToolRequest::Summarize { text } => json!({ "text": text }),
        ToolRequest::Caption { image } => json!({
            "image": image.data,
            "mimeType": image.mime_type,
        }),
        ToolRequest::Translate { text, language } => json!({
            "text": text,
            "language": language,
        }),
        ToolRequest::ExplainCode { code } => json!({ "code": code }),
        ToolRequest::VisualQa { image, question } => json!({
            "image": image.data,
            "mimeType": image.mime_type,
            "question": question,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InlineImage;

    #[test]
    fn development_defaults_to_localhost() {
        let url = base_url_for(Environment::Development, None).unwrap();
        assert_eq!(url, DEV_BASE_URL);
    }

    #[test]
    fn development_prefers_explicit_url() {
        let url = base_url_for(
            Environment::Development,
            Some("http://127.0.0.1:9000".to_string()),
        )
        .unwrap();
        assert_eq!(url, "http://127.0.0.1:9000");
    }

    #[test]
    fn production_requires_explicit_url() {
        let err = base_url_for(Environment::Production, None).unwrap_err();
        assert!(matches!(err, ConsoleError::MissingBaseUrl));
    }

    #[test]
    fn summarize_payload_has_text_field() {
        let payload = wire_payload(&ToolRequest::Summarize {
            text: "Hello".to_string(),
        });
        assert_eq!(payload, json!({ "text": "Hello" }));
    }

    #[test]
    fn caption_payload_uses_camel_case_mime_type() {
        let image = InlineImage::new("aGVsbG8=", "image/png").with_source_name("photo.png");
        let payload = wire_payload(&ToolRequest::Caption { image });
        assert_eq!(
            payload,
            json!({ "image": "aGVsbG8=", "mimeType": "image/png" })
        );
    }

    #[test]
    fn visual_qa_payload_carries_question() {
        let payload = wire_payload(&ToolRequest::VisualQa {
            image: InlineImage::new("aGVsbG8=", "image/jpeg"),
            question: "What is this?".to_string(),
        });
        assert_eq!(payload["question"], "What is this?");
        assert_eq!(payload["mimeType"], "image/jpeg");
    }
}
