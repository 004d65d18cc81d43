//! Network boundary of the submission controller.
//!
//! [`Transport`] sends one [`ProcessingRequest`] and hands back the status and
//! full body text. [`HttpTransport`] is the reqwest implementation; tests
//! substitute their own.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use super::request::ProcessingRequest;

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// No response was received
    #[error("{0}")]
    Network(String),

    /// The request could not be built from the payload; nothing was sent
    #[error("Failed to create file part for upload ({mime_type}): {message}")]
    InvalidPart { mime_type: String, message: String },
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ProcessingRequest) -> Result<RawResponse, TransportError>;
}

/// Posts multipart requests to the processing endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// # Errors
    /// - If the HTTP client cannot be built
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ProcessingRequest) -> Result<RawResponse, TransportError> {
        let file_part = reqwest::multipart::Part::bytes(request.audio.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|e| TransportError::InvalidPart {
                mime_type: request.mime_type.clone(),
                message: e.to_string(),
            })?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("target_language", request.target_language.code().to_string());

        tracing::debug!(
            "Processing API Call:\n  URL: {}\n  Method: POST\n  Content-Type: multipart/form-data\n  Body parameters:\n    file={} ({} bytes, {})\n    target_language={}",
            self.endpoint,
            request.file_name,
            request.audio.len(),
            request.mime_type,
            request.target_language.code()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json; charset=utf-8")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_connect() {
                    format!(
                        "Failed to connect to the processing server at {}. Is it running?",
                        self.endpoint
                    )
                } else if e.is_timeout() {
                    "Request to the processing server timed out.".to_string()
                } else {
                    format!("Network error: {e}")
                };
                TransportError::Network(message)
            })?;

        let status = response.status().as_u16();
        tracing::info!("Response status: {status}");

        // The whole body is read as text before any parsing
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?;
        tracing::debug!("Response received, length: {} characters", body.chars().count());

        Ok(RawResponse { status, body })
    }
}
