//! Supported target languages and their display names.
//!
//! The processing endpoint understands a closed set of language codes. Any code
//! outside that set (including whatever the endpoint reports as a detected
//! source language) is displayed as "Unknown Language" rather than rejected.

use serde::{Deserialize, Serialize};

/// Label used for any language code outside the supported set.
pub const UNKNOWN_LANGUAGE: &str = "Unknown Language";

/// Represents a supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi-IN")]
    Hindi,
    #[serde(rename = "mr-IN")]
    Marathi,
    #[serde(rename = "gu-IN")]
    Gujarati,
    #[serde(rename = "ta-IN")]
    Tamil,
    #[serde(rename = "te-IN")]
    Telugu,
}

impl TargetLanguage {
    /// Code sent to the endpoint as the `target_language` form field.
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::Hindi => "hi-IN",
            TargetLanguage::Marathi => "mr-IN",
            TargetLanguage::Gujarati => "gu-IN",
            TargetLanguage::Tamil => "ta-IN",
            TargetLanguage::Telugu => "te-IN",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Marathi => "Marathi",
            TargetLanguage::Gujarati => "Gujarati",
            TargetLanguage::Tamil => "Tamil",
            TargetLanguage::Telugu => "Telugu",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(TargetLanguage::English),
            "hi-IN" => Some(TargetLanguage::Hindi),
            "mr-IN" => Some(TargetLanguage::Marathi),
            "gu-IN" => Some(TargetLanguage::Gujarati),
            "ta-IN" => Some(TargetLanguage::Tamil),
            "te-IN" => Some(TargetLanguage::Telugu),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            TargetLanguage::English,
            TargetLanguage::Hindi,
            TargetLanguage::Marathi,
            TargetLanguage::Gujarati,
            TargetLanguage::Tamil,
            TargetLanguage::Telugu,
        ]
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Human-readable name for a language code as returned by the endpoint.
///
/// Total over all inputs: absent or unrecognized codes map to [`UNKNOWN_LANGUAGE`].
pub fn display_name(code: Option<&str>) -> &'static str {
    code.and_then(TargetLanguage::from_code)
        .map(|language| language.name())
        .unwrap_or(UNKNOWN_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for language in TargetLanguage::all() {
            assert_eq!(TargetLanguage::from_code(language.code()), Some(*language));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(Some("hi-IN")), "Hindi");
        assert_eq!(display_name(Some("en")), "English");
        assert_eq!(display_name(Some("te-IN")), "Telugu");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(display_name(Some("fr-FR")), UNKNOWN_LANGUAGE);
        assert_eq!(display_name(Some("hi")), UNKNOWN_LANGUAGE);
        assert_eq!(display_name(Some("")), UNKNOWN_LANGUAGE);
        assert_eq!(display_name(None), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&TargetLanguage::Marathi).unwrap();
        assert_eq!(json, "\"mr-IN\"");
    }
}
