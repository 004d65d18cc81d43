//! Turns a processing result into display fragments.
//!
//! Rendering is a pure function of the [`ProcessingResult`]: every piece of text
//! is classified by script and paired with the style it should be shown in.
//! The [`terminal`] submodule prints these fragments.

pub mod terminal;

use serde::Serialize;

use crate::language::display_name;
use crate::processing::ProcessingResult;
use crate::script::{classify, style_for, ScriptCategory, StyleClass};

pub const NO_TRANSCRIPTION: &str = "No transcription available";
pub const NO_TRANSLATION: &str = "No translation available";

/// Text tagged with its detected script and display style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledText {
    pub text: String,
    pub script: ScriptCategory,
    pub style: StyleClass,
}

impl StyledText {
    pub fn new(text: &str) -> Self {
        let script = classify(Some(text));
        Self {
            text: text.to_string(),
            script,
            style: style_for(script),
        }
    }
}

/// A headed block of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: StyledText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranscriptionView {
    Available(Section),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "sections", rename_all = "snake_case")]
pub enum TranslationView {
    /// One block per translation engine that produced output
    Available(Vec<Section>),
    Unavailable,
}

/// Character count and script of one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Unicode scalar values, not bytes
    pub characters: usize,
    pub script: ScriptCategory,
}

impl TextStats {
    pub fn of(text: Option<&str>) -> Self {
        Self {
            characters: text.map(|t| t.chars().count()).unwrap_or(0),
            script: classify(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsView {
    pub source_language: &'static str,
    pub target_language: &'static str,
    pub transcription: TextStats,
    /// Present only when the primary translation is
    pub primary_translation: Option<TextStats>,
    /// Present only when the secondary translation is
    pub secondary_translation: Option<TextStats>,
}

/// The three display fragments produced for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    pub transcription: TranscriptionView,
    pub translation: TranslationView,
    pub insights: InsightsView,
}

pub fn render(result: &ProcessingResult) -> RenderedResult {
    let source_name = display_name(result.source_language.as_deref());
    let target_name = display_name(result.target_language.as_deref());

    RenderedResult {
        transcription: render_transcription(result, source_name),
        translation: render_translation(result, target_name),
        insights: InsightsView {
            source_language: source_name,
            target_language: target_name,
            transcription: TextStats::of(result.transcription.as_deref()),
            primary_translation: result
                .primary_translation
                .as_deref()
                .map(|t| TextStats::of(Some(t))),
            secondary_translation: result
                .secondary_translation
                .as_deref()
                .map(|t| TextStats::of(Some(t))),
        },
    }
}

fn render_transcription(result: &ProcessingResult, source_name: &str) -> TranscriptionView {
    match result.transcription.as_deref() {
        Some(text) => TranscriptionView::Available(Section {
            heading: format!("Original Transcription ({source_name})"),
            body: StyledText::new(text),
        }),
        None => TranscriptionView::Unavailable,
    }
}

fn render_translation(result: &ProcessingResult, target_name: &str) -> TranslationView {
    let primary = result.primary_translation.as_deref();

    match (result.secondary_translation.as_deref(), primary) {
        (Some(secondary), _) => {
            let mut sections = vec![Section {
                heading: format!("Google Gemini Translation ({target_name})"),
                body: StyledText::new(secondary),
            }];
            if let Some(primary) = primary {
                sections.push(Section {
                    heading: format!("Sarvam AI Translation ({target_name})"),
                    body: StyledText::new(primary),
                });
            }
            TranslationView::Available(sections)
        }
        (None, Some(primary)) => TranslationView::Available(vec![Section {
            heading: format!("Translation ({target_name})"),
            body: StyledText::new(primary),
        }]),
        (None, None) => TranslationView::Unavailable,
    }
}
