//! Upload an audio file and show its transcription and translation.
//!
//! Walks one session through the whole lifecycle: select the file, select the
//! target language, submit, and print the three display regions.

use anyhow::anyhow;
use cliclack::{log, select, spinner};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Once;

use crate::config::BhashantarConfig;
use crate::language::TargetLanguage;
use crate::processing::{HttpTransport, ProcessingResult, SubmissionController};
use crate::render::terminal::format_regions;
use crate::session::{DisplayRegions, Session, TRANSCRIPTION_LOADING};
use crate::upload::AudioFile;

/// Options of the `process` command.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub file: PathBuf,
    /// Target language code; falls back to the config default, then a prompt
    pub language: Option<String>,
    /// Overrides the configured endpoint URL
    pub endpoint: Option<String>,
    pub json: bool,
    pub output: Option<String>,
}

/// Exit status after Ctrl-C, as shells report for SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

static INTERRUPT_HANDLER: Once = Once::new();

/// Machine-readable output of `--json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    file: Option<&'a str>,
    target_language: Option<&'static str>,
    result: Option<&'a ProcessingResult>,
    error: Option<String>,
    regions: &'a DisplayRegions,
}

/// Handles the `process` command.
///
/// # Errors
/// - If the configuration cannot be loaded
/// - If the file cannot be read or is not an accepted audio file
/// - If no target language is available and none can be prompted for
/// - If processing fails (the failure is printed in every region first)
/// - If the output cannot be written
pub async fn handle_process(options: ProcessOptions) -> anyhow::Result<()> {
    tracing::info!("=== bhashantar Process Command ===");

    let config = BhashantarConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
        anyhow!("Configuration error: {e}")
    })?;
    let interactive = std::io::stderr().is_terminal();
    if interactive {
        install_interrupt_handler()?;
    }

    let mut session = Session::new();

    let audio = AudioFile::from_path(&options.file)?;
    let candidate = session.select_file(&audio)?;
    if interactive {
        log::info(format!(
            "File Name: {}\nFile Size: {:.2} KB",
            candidate.name,
            candidate.byte_size as f64 / 1024.0
        ))?;
    }

    let language = resolve_language(options.language.as_deref(), &config, interactive)?;
    session.select_language(Some(language));
    tracing::debug!(
        "Session phase: {:?}, submit enabled: {}",
        session.phase(),
        session.ui_state().can_submit()
    );

    let endpoint = options.endpoint.as_deref().unwrap_or(&config.endpoint.url);
    let transport = HttpTransport::new(endpoint, config.endpoint.timeout())?;
    tracing::info!("Using endpoint {}", transport.endpoint());
    let controller = SubmissionController::new(transport);

    let progress = spinner();
    if interactive {
        progress.start(TRANSCRIPTION_LOADING);
    }

    let outcome = controller.submit(&mut session).await;

    if interactive {
        match &outcome {
            Ok(_) => progress.stop("Processing complete"),
            Err(_) => progress.error("Processing failed"),
        }
    }

    let rendered = if options.json {
        let output = JsonOutput {
            file: session.candidate().map(|c| c.name.as_str()),
            target_language: session.target_language().map(|l| l.code()),
            result: outcome.as_ref().ok(),
            error: outcome.as_ref().err().map(|e| e.to_string()),
            regions: session.regions(),
        };
        format!("{}\n", serde_json::to_string_pretty(&output)?)
    } else {
        let colored = options.output.is_none() && console::colors_enabled();
        format_regions(session.regions(), config.display.show_insights, colored)
    };

    if let Some(file_path) = &options.output {
        std::fs::write(file_path, &rendered)
            .map_err(|e| anyhow!("Failed to write to file '{file_path}': {e}"))?;
        tracing::debug!("Results written to file: {file_path}");
    } else {
        print!("{rendered}");
    }

    outcome
        .map(|_| ())
        .map_err(|e| anyhow::Error::new(e).context("Processing failed"))
}

/// Picks the target language: command line, then config default, then a prompt.
fn resolve_language(
    code: Option<&str>,
    config: &BhashantarConfig,
    interactive: bool,
) -> anyhow::Result<TargetLanguage> {
    if let Some(code) = code {
        return TargetLanguage::from_code(code).ok_or_else(|| {
            anyhow!(
                "Unsupported target language '{code}'. Run 'bhashantar languages' to list supported codes"
            )
        });
    }

    if let Some(language) = config.defaults.target_language() {
        tracing::debug!("Using default target language {}", language.code());
        return Ok(language);
    }

    if !interactive || !std::io::stdin().is_terminal() {
        return Err(anyhow!(
            "No target language given. Use --language or set defaults.target_language in the config file"
        ));
    }

    prompt_language()
}

/// Ends the process on Ctrl-C, restoring the cursor hidden by the prompt or spinner.
///
/// Prompts read Ctrl-C themselves while they own the terminal, so the handler
/// only fires while waiting on the endpoint.
fn install_interrupt_handler() -> anyhow::Result<()> {
    let mut result = Ok(());
    INTERRUPT_HANDLER.call_once(|| {
        result = ctrlc::set_handler(|| {
            let _ = console::Term::stderr().show_cursor();
            tracing::warn!("Interrupted while processing");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        });
    });
    result.map_err(|e| anyhow!("Failed to set Ctrl-C handler: {e}"))
}

fn prompt_language() -> anyhow::Result<TargetLanguage> {
    let mut prompt = select("Select target language:");
    for language in TargetLanguage::all() {
        prompt = prompt.item(*language, language.name(), language.code());
    }
    prompt
        .interact()
        .map_err(|e| anyhow!("Language selection cancelled: {e}"))
}
