//! Drives one submission from a ready session to rendered output.

use std::path::PathBuf;
use thiserror::Error;

use super::request::{ProcessingRequest, ProcessingResult};
use super::transport::{Transport, TransportError};
use crate::render::render;
use crate::session::{Session, SessionError, Submission};

/// Ways a submission can fail.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to read audio file '{}': {source}", path.display())]
    Payload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Network(String),

    #[error("Failed to prepare upload: {0}")]
    Upload(String),

    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    #[error("Failed to parse response: {parser_message}")]
    MalformedResponse { parser_message: String },
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(message) => SubmitError::Network(message),
            TransportError::InvalidPart { .. } => SubmitError::Upload(err.to_string()),
        }
    }
}

/// Sends the session's file to the endpoint and records the outcome in the session.
pub struct SubmissionController<T> {
    transport: T,
}

impl<T: Transport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submits the selected file and language.
    ///
    /// The session is `Submitting` for the duration of the call and is back to an
    /// interactive state when it returns, whatever the outcome. On success the
    /// rendered result is in the session's display regions; on failure every
    /// region shows the error. Nothing is retried.
    ///
    /// # Errors
    /// - If the session is not ready (nothing is changed in that case)
    /// - If the audio file cannot be read
    /// - If the endpoint cannot be reached
    /// - If the endpoint answers with a non-2xx status
    /// - If the response body is not a JSON object
    pub async fn submit(&self, session: &mut Session) -> Result<ProcessingResult, SubmitError> {
        let submission = session.begin_submission()?;
        tracing::info!(
            "Submitting {} with target language {}",
            submission.candidate.name,
            submission.target_language.code()
        );

        match self.exchange(&submission).await {
            Ok(result) => {
                tracing::info!(
                    "Processing succeeded. Source language: {}",
                    result.source_language.as_deref().unwrap_or("unknown")
                );
                session.complete(render(&result));
                Ok(result)
            }
            Err(e) => {
                tracing::error!("Processing failed: {e}");
                session.fail(&e.to_string());
                Err(e)
            }
        }
    }

    async fn exchange(&self, submission: &Submission) -> Result<ProcessingResult, SubmitError> {
        let request = ProcessingRequest::load(&submission.candidate, submission.target_language)
            .await
            .map_err(|source| SubmitError::Payload {
                path: submission.candidate.path.clone(),
                source,
            })?;

        let response = self.transport.send(&request).await?;

        if !response.is_success() {
            return Err(SubmitError::Server {
                status: response.status,
                detail: response.body,
            });
        }

        ProcessingResult::from_body(&response.body).map_err(|e| {
            let preview: String = response.body.chars().take(200).collect();
            tracing::error!("Failed to parse JSON: {e}. Response preview: {preview}");
            SubmitError::MalformedResponse {
                parser_message: e.to_string(),
            }
        })
    }
}
