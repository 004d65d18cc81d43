//! Request and response payloads exchanged with the processing endpoint.

use serde::{Deserialize, Deserializer, Serialize};

use crate::language::TargetLanguage;
use crate::upload::UploadCandidate;

/// Everything sent in one `POST` to the endpoint.
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    /// Raw audio bytes, sent unmodified
    pub audio: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
    pub target_language: TargetLanguage,
}

impl ProcessingRequest {
    /// Reads the candidate's bytes from disk and pairs them with the target language.
    pub async fn load(
        candidate: &UploadCandidate,
        target_language: TargetLanguage,
    ) -> std::io::Result<Self> {
        let audio = tokio::fs::read(&candidate.path).await?;
        Ok(Self {
            audio,
            file_name: candidate.name.clone(),
            mime_type: candidate.upload_mime_type().to_string(),
            target_language,
        })
    }
}

/// Parsed success response from the endpoint.
///
/// Every field is optional. Empty strings and values that are not strings are
/// treated the same as missing fields so that callers only have to check for
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    #[serde(default, deserialize_with = "non_empty")]
    pub source_language: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub target_language: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub transcription: Option<String>,
    /// Output of the primary translation engine
    #[serde(rename = "translated_text", default, deserialize_with = "non_empty")]
    pub primary_translation: Option<String>,
    /// Output of the alternate translation engine
    #[serde(rename = "gemini_translation", default, deserialize_with = "non_empty")]
    pub secondary_translation: Option<String>,
}

impl ProcessingResult {
    /// Parses a complete response body.
    ///
    /// The body must be a JSON object; unknown fields are ignored.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object",
            ));
        }
        serde_json::from_value(value)
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let body = r#"{
            "source_language": "hi-IN",
            "target_language": "en",
            "transcription": "नमस्ते",
            "translated_text": "Hello",
            "gemini_translation": "Hi there"
        }"#;
        let result = ProcessingResult::from_body(body).unwrap();
        assert_eq!(result.source_language.as_deref(), Some("hi-IN"));
        assert_eq!(result.target_language.as_deref(), Some("en"));
        assert_eq!(result.transcription.as_deref(), Some("नमस्ते"));
        assert_eq!(result.primary_translation.as_deref(), Some("Hello"));
        assert_eq!(result.secondary_translation.as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_partial_response() {
        let result =
            ProcessingResult::from_body(r#"{"transcription": "hello", "extra": 1}"#).unwrap();
        assert_eq!(result.transcription.as_deref(), Some("hello"));
        assert_eq!(result.primary_translation, None);
        assert_eq!(result.secondary_translation, None);
        assert_eq!(result.source_language, None);
    }

    #[test]
    fn test_empty_and_null_fields_are_absent() {
        let result = ProcessingResult::from_body(
            r#"{"transcription": "", "translated_text": null, "source_language": "ta-IN"}"#,
        )
        .unwrap();
        assert_eq!(result.transcription, None);
        assert_eq!(result.primary_translation, None);
        assert_eq!(result.source_language.as_deref(), Some("ta-IN"));
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(ProcessingResult::from_body("not json").is_err());
        assert!(ProcessingResult::from_body("").is_err());
        assert!(ProcessingResult::from_body(r#"["hello"]"#).is_err());
        assert!(ProcessingResult::from_body("null").is_err());
    }

    #[test]
    fn test_wrongly_typed_fields_are_absent() {
        let result = ProcessingResult::from_body(
            r#"{"transcription": "ok", "source_language": 5, "translated_text": ["x"], "gemini_translation": {"text": "y"}}"#,
        )
        .unwrap();
        assert_eq!(result.transcription.as_deref(), Some("ok"));
        assert_eq!(result.source_language, None);
        assert_eq!(result.primary_translation, None);
        assert_eq!(result.secondary_translation, None);

        let rendered = crate::render::render(&result);
        assert_eq!(rendered.insights.source_language, "Unknown Language");
        assert!(matches!(
            rendered.transcription,
            crate::render::TranscriptionView::Available(ref section) if section.body.text == "ok"
        ));
    }

    #[test]
    fn test_object_error_message() {
        let err = ProcessingResult::from_body("[]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }
}
