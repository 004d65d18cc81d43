//! Plain and coloured terminal output for the display regions.

use console::Style;

use super::{InsightsView, Section, TextStats, TranscriptionView, TranslationView};
use super::{NO_TRANSCRIPTION, NO_TRANSLATION};
use crate::session::{DisplayRegions, Region};

/// Formats all regions. With `colored` off the output contains no escape codes.
pub fn format_regions(regions: &DisplayRegions, show_insights: bool, colored: bool) -> String {
    let mut out = String::new();

    push_heading(&mut out, "Transcription", colored);
    push_region(&mut out, &regions.transcription, colored, |out, view| {
        match view {
            TranscriptionView::Available(section) => push_section(out, section, colored),
            TranscriptionView::Unavailable => push_error(out, NO_TRANSCRIPTION, colored),
        }
    });

    push_heading(&mut out, "Translation", colored);
    push_region(&mut out, &regions.translation, colored, |out, view| match view {
        TranslationView::Available(sections) => {
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                push_section(out, section, colored);
            }
        }
        TranslationView::Unavailable => push_error(out, NO_TRANSLATION, colored),
    });

    if show_insights {
        push_heading(&mut out, "Insights", colored);
        push_region(&mut out, &regions.insights, colored, |out, view| {
            push_insights(out, view)
        });
    }

    out
}

fn push_heading(out: &mut String, title: &str, colored: bool) {
    if !out.is_empty() {
        out.push('\n');
    }
    let line = format!("━━ {title} ━━");
    push_line(out, &paint(&line, Style::new().bold(), colored));
}

fn push_region<T>(
    out: &mut String,
    region: &Region<T>,
    colored: bool,
    ready: impl FnOnce(&mut String, &T),
) {
    match region {
        Region::Placeholder(text) => {
            push_line(out, &paint(text, Style::new().dim(), colored));
        }
        Region::Loading(text) => {
            push_line(out, &paint(text, Style::new().blue().italic(), colored));
        }
        Region::Ready(view) => ready(out, view),
        Region::Failed(message) => push_error(out, message, colored),
    }
}

fn push_section(out: &mut String, section: &Section, colored: bool) {
    push_line(out, &paint(&section.heading, Style::new().underlined(), colored));
    let body_style = Style::new().fg(section.body.style.terminal_color());
    push_line(out, &paint(&section.body.text, body_style, colored));
}

fn push_error(out: &mut String, message: &str, colored: bool) {
    push_line(out, &paint(message, Style::new().red().bold(), colored));
}

fn push_insights(out: &mut String, insights: &InsightsView) {
    push_line(out, &format!("Source Language: {}", insights.source_language));
    push_line(out, &format!("Target Language: {}", insights.target_language));
    push_line(out, "Transcription Details:");
    push_stats(out, "", &insights.transcription);

    if insights.primary_translation.is_some() || insights.secondary_translation.is_some() {
        push_line(out, "Translation Details:");
        if let Some(stats) = &insights.primary_translation {
            push_stats(out, "Sarvam ", stats);
        }
        if let Some(stats) = &insights.secondary_translation {
            push_stats(out, "Gemini ", stats);
        }
    }
}

fn push_stats(out: &mut String, prefix: &str, stats: &TextStats) {
    push_line(out, &format!("  • {prefix}Characters: {}", stats.characters));
    push_line(out, &format!("  • {prefix}Script: {}", stats.script));
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn paint(text: &str, with: Style, colored: bool) -> String {
    if colored {
        with.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Prints a validation or submission problem to stderr.
pub fn print_notification(message: &str) {
    eprintln!("{}", format_notification(message, console::colors_enabled_stderr()));
}

fn format_notification(message: &str, colored: bool) -> String {
    format!(
        "{} {}",
        paint("✗", Style::new().red().bold(), colored),
        paint(message, Style::new().red(), colored)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ProcessingResult;
    use crate::render::render;
    use crate::session::Session;

    fn rendered_regions(json: &str) -> DisplayRegions {
        let result = ProcessingResult::from_body(json).unwrap();
        let mut regions = DisplayRegions::default();
        let rendered = render(&result);
        regions.transcription = Region::Ready(rendered.transcription);
        regions.translation = Region::Ready(rendered.translation);
        regions.insights = Region::Ready(rendered.insights);
        regions
    }

    #[test]
    fn test_placeholders() {
        let text = format_regions(Session::new().regions(), true, false);
        assert!(text.contains("Your transcription will appear here."));
        assert!(text.contains("Your translated text will appear here."));
        assert!(text.contains("Additional insights will appear here."));
    }

    #[test]
    fn test_full_result() {
        let regions = rendered_regions(
            r#"{"source_language": "hi-IN", "target_language": "en", "transcription": "नमस्ते", "translated_text": "Hello"}"#,
        );
        let text = format_regions(&regions, true, false);
        assert!(text.contains("Original Transcription (Hindi)\nनमस्ते"));
        assert!(text.contains("Translation (English)\nHello"));
        assert!(text.contains("Script: Devanagari (Hindi/Marathi)"));
        assert!(text.contains("Sarvam Characters: 5"));
        assert!(!text.contains("Gemini"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_unavailable_notices() {
        let regions = rendered_regions("{}");
        let text = format_regions(&regions, true, false);
        assert!(text.contains(NO_TRANSCRIPTION));
        assert!(text.contains(NO_TRANSLATION));
        assert!(text.contains("Source Language: Unknown Language"));
        assert!(!text.contains("Translation Details"));
    }

    #[test]
    fn test_notification_names_the_rule() {
        let too_large = crate::upload::ValidationError::TooLarge {
            byte_size: crate::upload::MAX_FILE_SIZE + 1,
        };
        assert_eq!(
            format_notification(&too_large.to_string(), false),
            "✗ File is too large. Maximum size is 10MB."
        );
        assert!(format_notification("Processing failed", true).contains("Processing failed"));
    }

    #[test]
    fn test_insights_can_be_hidden() {
        let regions = rendered_regions(r#"{"transcription": "hi"}"#);
        let text = format_regions(&regions, false, false);
        assert!(!text.contains("Insights"));
        assert!(!text.contains("Source Language"));
    }
}
