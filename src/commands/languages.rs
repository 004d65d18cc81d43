//! List the supported target languages.

use console::style;

use crate::config::BhashantarConfig;
use crate::language::TargetLanguage;

/// Prints every supported target language code with its name.
///
/// The configured default, if any, is marked.
pub fn handle_languages() -> anyhow::Result<()> {
    let default = BhashantarConfig::load()
        .map_err(|e| tracing::warn!("Could not load configuration: {e}"))
        .ok()
        .and_then(|config| config.defaults.target_language());

    println!("{}", format_languages(default));
    Ok(())
}

fn format_languages(default: Option<TargetLanguage>) -> String {
    TargetLanguage::all()
        .iter()
        .map(|language| {
            let marker = if Some(*language) == default {
                format!(" {}", style("(default)").dim())
            } else {
                String::new()
            };
            format!("{:<6} {}{marker}", language.code(), language.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
