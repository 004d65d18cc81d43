//! Script detection for display typography.
//!
//! Text is classified by the first Unicode block it touches, checked in a fixed
//! priority order, and each resulting category maps to a presentation style.

use console::Color;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Writing system a piece of text is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptCategory {
    Devanagari,
    Gujarati,
    Tamil,
    Telugu,
    Latin,
    MixedOrOther,
    /// Absent or empty text
    NoText,
}

/// Indic blocks in priority order. The first block with any code point in the text wins.
const INDIC_BLOCKS: [(ScriptCategory, char, char); 4] = [
    (ScriptCategory::Devanagari, '\u{0900}', '\u{097F}'),
    (ScriptCategory::Gujarati, '\u{0A80}', '\u{0AFF}'),
    (ScriptCategory::Tamil, '\u{0B80}', '\u{0BFF}'),
    (ScriptCategory::Telugu, '\u{0C00}', '\u{0C7F}'),
];

impl ScriptCategory {
    /// Label shown next to character counts.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptCategory::Devanagari => "Devanagari (Hindi/Marathi)",
            ScriptCategory::Gujarati => "Gujarati",
            ScriptCategory::Tamil => "Tamil",
            ScriptCategory::Telugu => "Telugu",
            ScriptCategory::Latin => "Latin (English)",
            ScriptCategory::MixedOrOther => "Mixed/Other Script",
            ScriptCategory::NoText => "No text",
        }
    }
}

impl std::fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies text by its writing system.
///
/// Devanagari is checked first, then Gujarati, Tamil, Telugu and finally ASCII
/// letters, so text mixing Latin and Devanagari is reported as Devanagari.
pub fn classify(text: Option<&str>) -> ScriptCategory {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return ScriptCategory::NoText,
    };

    for (category, start, end) in INDIC_BLOCKS {
        if text.chars().any(|c| (start..=end).contains(&c)) {
            return category;
        }
    }

    if text.chars().any(|c| c.is_ascii_alphabetic()) {
        return ScriptCategory::Latin;
    }

    ScriptCategory::MixedOrOther
}

/// Presentation style for a script category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Hindi,
    Gujarati,
    Tamil,
    Telugu,
    English,
    Generic,
}

impl StyleClass {
    pub fn class_name(&self) -> &'static str {
        match self {
            StyleClass::Hindi => "hindi-text",
            StyleClass::Gujarati => "gujarati-text",
            StyleClass::Tamil => "tamil-text",
            StyleClass::Telugu => "telugu-text",
            StyleClass::English => "english-text",
            StyleClass::Generic => "generic-text",
        }
    }

    /// Font family to prefer when the text is displayed graphically.
    pub fn font_family(&self) -> &'static str {
        match self {
            StyleClass::Hindi => "'Noto Sans Devanagari', 'Arial Unicode MS', Arial, sans-serif",
            StyleClass::Gujarati => "'Noto Sans Gujarati', 'Arial Unicode MS', Arial, sans-serif",
            StyleClass::Tamil => "'Noto Sans Tamil', 'Arial Unicode MS', Arial, sans-serif",
            StyleClass::Telugu => "'Noto Sans Telugu', 'Arial Unicode MS', Arial, sans-serif",
            StyleClass::English => "'Arial', 'Helvetica', sans-serif",
            StyleClass::Generic => "sans-serif",
        }
    }

    /// Terminal colour used in place of a font family.
    pub fn terminal_color(&self) -> Color {
        match self {
            StyleClass::Hindi => Color::Yellow,
            StyleClass::Gujarati => Color::Magenta,
            StyleClass::Tamil => Color::Cyan,
            StyleClass::Telugu => Color::Green,
            StyleClass::English => Color::White,
            StyleClass::Generic => Color::White,
        }
    }
}

impl Serialize for StyleClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StyleClass", 2)?;
        state.serialize_field("class_name", self.class_name())?;
        state.serialize_field("font_family", self.font_family())?;
        state.end()
    }
}

pub fn style_for(category: ScriptCategory) -> StyleClass {
    match category {
        ScriptCategory::Devanagari => StyleClass::Hindi,
        ScriptCategory::Gujarati => StyleClass::Gujarati,
        ScriptCategory::Tamil => StyleClass::Tamil,
        ScriptCategory::Telugu => StyleClass::Telugu,
        ScriptCategory::Latin => StyleClass::English,
        ScriptCategory::MixedOrOther | ScriptCategory::NoText => StyleClass::Generic,
    }
}
