//! Submission of audio to the remote processing endpoint.
//!
//! The endpoint performs transcription and translation. This module builds the
//! multipart request, performs the single `POST` and parses the JSON response.

pub mod controller;
pub mod request;
pub mod transport;

pub use controller::SubmissionController;
pub use request::ProcessingResult;
pub use transport::HttpTransport;
