//! Audio file selection.
//!
//! Turns a file on disk into an [`UploadCandidate`] once it passes the upload
//! policy: MP3 or WAV, at most 10 MiB.

pub mod validator;

pub use validator::{validate, AudioFile, UploadCandidate, ValidationError, MAX_FILE_SIZE};
