//! Upload session state.
//!
//! A [`Session`] holds the selected file, the selected target language and the
//! content of the three display regions (transcription, translation and
//! insights). Every user action is a method on the session; the enablement of
//! the submit action is derived from the session through [`UiState`].
//!
//! ```text
//! Empty ── valid file ──▶ FileSelected ── language ──▶ Ready ── submit ──▶ Submitting
//!   ▲                                                    ▲                      │
//!   └──────────── invalid file (from any state) ─────────┴──── completion ──────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::language::TargetLanguage;
use crate::render::{InsightsView, RenderedResult, TranscriptionView, TranslationView};
use crate::upload::{validate, AudioFile, UploadCandidate, ValidationError, MAX_FILE_SIZE};

pub const TRANSCRIPTION_PLACEHOLDER: &str = "Your transcription will appear here.";
pub const TRANSLATION_PLACEHOLDER: &str = "Your translated text will appear here.";
pub const INSIGHTS_PLACEHOLDER: &str = "Additional insights will appear here.";

pub const TRANSCRIPTION_LOADING: &str = "Processing audio... This may take a minute.";
pub const TRANSLATION_LOADING: &str = "Translating text... Please wait.";
pub const INSIGHTS_LOADING: &str = "Processing insights...";

/// Where the session is in the upload lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Empty,
    FileSelected,
    Ready,
    Submitting,
}

/// Flags that decide whether submission is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UiState {
    pub has_valid_file: bool,
    pub has_selected_language: bool,
    pub is_submitting: bool,
}

impl UiState {
    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else if !self.has_valid_file {
            Phase::Empty
        } else if !self.has_selected_language {
            Phase::FileSelected
        } else {
            Phase::Ready
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Ready
    }
}

/// Why a submission could not be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No valid audio file selected")]
    NoFile,
    #[error("No target language selected")]
    NoLanguage,
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Content of one display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum Region<T> {
    Placeholder(&'static str),
    Loading(&'static str),
    Ready(T),
    Failed(String),
}

#[cfg(test)]
impl<T> Region<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Region::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Region::Loading(_))
    }
}

/// The three output regions shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRegions {
    pub transcription: Region<TranscriptionView>,
    pub translation: Region<TranslationView>,
    pub insights: Region<InsightsView>,
}

impl Default for DisplayRegions {
    fn default() -> Self {
        Self {
            transcription: Region::Placeholder(TRANSCRIPTION_PLACEHOLDER),
            translation: Region::Placeholder(TRANSLATION_PLACEHOLDER),
            insights: Region::Placeholder(INSIGHTS_PLACEHOLDER),
        }
    }
}

impl DisplayRegions {
    fn loading() -> Self {
        Self {
            transcription: Region::Loading(TRANSCRIPTION_LOADING),
            translation: Region::Loading(TRANSLATION_LOADING),
            insights: Region::Loading(INSIGHTS_LOADING),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            transcription: Region::Failed(format!("Error processing audio: {message}")),
            translation: Region::Failed("Translation failed".to_string()),
            insights: Region::Failed(format!("Error details: {message}")),
        }
    }

    fn rendered(result: RenderedResult) -> Self {
        Self {
            transcription: Region::Ready(result.transcription),
            translation: Region::Ready(result.translation),
            insights: Region::Ready(result.insights),
        }
    }
}

/// What a started submission needs to send.
#[derive(Debug, Clone)]
pub struct Submission {
    pub candidate: UploadCandidate,
    pub target_language: TargetLanguage,
}

/// State of a single upload session.
#[derive(Debug, Default)]
pub struct Session {
    candidate: Option<UploadCandidate>,
    target_language: Option<TargetLanguage>,
    submitting: bool,
    regions: DisplayRegions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            has_valid_file: self.candidate.is_some(),
            has_selected_language: self.target_language.is_some(),
            is_submitting: self.submitting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.ui_state().phase()
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn target_language(&self) -> Option<TargetLanguage> {
        self.target_language
    }

    pub fn regions(&self) -> &DisplayRegions {
        &self.regions
    }

    /// Replaces the selected file.
    ///
    /// The display regions go back to their placeholders and the previous
    /// candidate is dropped whether or not the new file is accepted.
    pub fn select_file(&mut self, file: &AudioFile) -> Result<&UploadCandidate, ValidationError> {
        self.regions = DisplayRegions::default();
        self.candidate = None;

        match validate(file) {
            Ok(candidate) => {
                tracing::info!(
                    "Selected {} ({} bytes, type '{}')",
                    candidate.name,
                    candidate.byte_size,
                    candidate.mime_type
                );
                Ok(&*self.candidate.insert(candidate))
            }
            Err(e) => {
                match &e {
                    ValidationError::InvalidType {
                        mime_type,
                        extension,
                    } => tracing::warn!(
                        "Rejected {}: type '{mime_type}', extension '{extension}'",
                        file.name
                    ),
                    ValidationError::TooLarge { byte_size } => tracing::warn!(
                        "Rejected {}: {byte_size} bytes exceeds {MAX_FILE_SIZE}",
                        file.name
                    ),
                }
                Err(e)
            }
        }
    }

    /// Sets or clears the target language. Display regions are left untouched.
    pub fn select_language(&mut self, language: Option<TargetLanguage>) {
        tracing::debug!("Target language: {:?}", language.map(|l| l.code()));
        self.target_language = language;
    }

    /// Moves from `Ready` to `Submitting`.
    ///
    /// # Errors
    /// - If a submission is already in flight
    /// - If no valid file or no language is selected
    pub fn begin_submission(&mut self) -> Result<Submission, SessionError> {
        if self.submitting {
            return Err(SessionError::AlreadySubmitting);
        }
        let candidate = self.candidate.clone().ok_or(SessionError::NoFile)?;
        let target_language = self.target_language.ok_or(SessionError::NoLanguage)?;

        self.submitting = true;
        self.regions = DisplayRegions::loading();

        Ok(Submission {
            candidate,
            target_language,
        })
    }

    /// Ends the in-flight submission with a rendered result.
    pub fn complete(&mut self, result: RenderedResult) {
        self.submitting = false;
        self.regions = DisplayRegions::rendered(result);
    }

    /// Ends the in-flight submission with an error shown in every region.
    pub fn fail(&mut self, message: &str) {
        self.submitting = false;
        self.regions = DisplayRegions::failed(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ProcessingResult;
    use crate::render::render;
    use std::path::PathBuf;

    fn audio(name: &str, byte_size: u64) -> AudioFile {
        AudioFile {
            name: name.to_string(),
            byte_size,
            mime_type: String::new(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.phase(), Phase::Empty);
        assert!(!session.ui_state().can_submit());

        session.select_file(&audio("clip.mp3", 1024)).unwrap();
        assert_eq!(session.phase(), Phase::FileSelected);
        assert!(!session.ui_state().can_submit());

        session.select_language(Some(TargetLanguage::Hindi));
        assert_eq!(session.phase(), Phase::Ready);
        assert!(session.ui_state().can_submit());

        let submission = session.begin_submission().unwrap();
        assert_eq!(submission.target_language, TargetLanguage::Hindi);
        assert_eq!(session.phase(), Phase::Submitting);
        assert!(!session.ui_state().can_submit());
        assert!(session.regions().transcription.is_loading());
        assert!(session.regions().translation.is_loading());
        assert!(session.regions().insights.is_loading());

        session.complete(render(&ProcessingResult::default()));
        assert_eq!(session.phase(), Phase::Ready);
        assert!(session.ui_state().can_submit());
    }

    #[test]
    fn test_failure_returns_to_ready() {
        let mut session = Session::new();
        session.select_file(&audio("clip.wav", 1024)).unwrap();
        session.select_language(Some(TargetLanguage::Tamil));
        session.begin_submission().unwrap();

        session.fail("Server error (500): boom");
        assert_eq!(session.phase(), Phase::Ready);
        let regions = session.regions();
        assert!(regions.transcription.is_failed());
        assert!(regions.translation.is_failed());
        assert!(regions.insights.is_failed());
        assert_eq!(
            regions.insights,
            Region::Failed("Error details: Server error (500): boom".to_string())
        );
    }

    #[test]
    fn test_second_submission_is_refused() {
        let mut session = Session::new();
        session.select_file(&audio("clip.wav", 1024)).unwrap();
        session.select_language(Some(TargetLanguage::English));
        session.begin_submission().unwrap();

        assert_eq!(
            session.begin_submission().unwrap_err(),
            SessionError::AlreadySubmitting
        );
        assert_eq!(session.phase(), Phase::Submitting);
    }

    #[test]
    fn test_submission_requires_file_and_language() {
        let mut session = Session::new();
        assert_eq!(session.begin_submission().unwrap_err(), SessionError::NoFile);

        session.select_language(Some(TargetLanguage::Gujarati));
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.begin_submission().unwrap_err(), SessionError::NoFile);

        session.select_language(None);
        session.select_file(&audio("clip.wav", 1024)).unwrap();
        assert_eq!(session.begin_submission().unwrap_err(), SessionError::NoLanguage);
        assert_eq!(session.phase(), Phase::FileSelected);
        assert_eq!(session.regions(), &DisplayRegions::default());
    }

    #[test]
    fn test_invalid_file_clears_selection() {
        let mut session = Session::new();
        session.select_language(Some(TargetLanguage::Marathi));
        session.select_file(&audio("clip.mp3", 1024)).unwrap();
        assert_eq!(session.phase(), Phase::Ready);

        let err = session.select_file(&audio("notes.txt", 10)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));
        assert!(session.candidate().is_none());
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.target_language(), Some(TargetLanguage::Marathi));
    }

    #[test]
    fn test_oversized_file_clears_selection() {
        let mut session = Session::new();
        session.select_language(Some(TargetLanguage::Tamil));
        session.select_file(&audio("clip.wav", 2048)).unwrap();
        assert_eq!(session.phase(), Phase::Ready);

        let err = session
            .select_file(&audio("long.mp3", MAX_FILE_SIZE + 1))
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { byte_size } if byte_size == MAX_FILE_SIZE + 1));
        assert!(session.candidate().is_none());
        assert_eq!(session.phase(), Phase::Empty);
        assert!(!session.ui_state().can_submit());
        assert_eq!(session.regions(), &DisplayRegions::default());
    }

    #[test]
    fn test_new_file_resets_regions() {
        let mut session = Session::new();
        session.select_file(&audio("a.mp3", 1024)).unwrap();
        session.select_language(Some(TargetLanguage::Hindi));
        session.begin_submission().unwrap();
        session.fail("network down");

        session.select_file(&audio("b.wav", 2048)).unwrap();
        assert_eq!(session.regions(), &DisplayRegions::default());
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.candidate().unwrap().name, "b.wav");
    }

    #[test]
    fn test_language_change_keeps_regions() {
        let mut session = Session::new();
        session.select_file(&audio("a.mp3", 1024)).unwrap();
        session.select_language(Some(TargetLanguage::Hindi));
        session.begin_submission().unwrap();
        session.fail("boom");

        session.select_language(Some(TargetLanguage::Telugu));
        assert!(session.regions().transcription.is_failed());

        session.select_language(None);
        assert_eq!(session.phase(), Phase::FileSelected);
        assert!(session.regions().translation.is_failed());
    }
}
