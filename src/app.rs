//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use crate::commands;
use crate::logging;

/// Transcribe and translate short audio clips
#[derive(Parser)]
#[command(name = "bhashantar")]
#[command(version)]
#[command(long_about = "Transcribe and translate short audio clips.\n\nUploads an MP3 or WAV file (up to 10MB) to the processing endpoint and prints\nthe transcription, the translation(s) and details about the detected scripts.\n\nEXAMPLES:\n    # Translate a clip to Hindi\n    $ bhashantar process clip.mp3 -l hi-IN\n\n    # Use the default language from the config file, or pick one interactively\n    $ bhashantar process voice.wav\n\n    # Machine-readable output\n    $ bhashantar process clip.mp3 -l ta-IN --json\n\n    # List supported target languages\n    $ bhashantar languages")]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/bhashantar/bhashantar.toml\n    Logs:               ~/.local/state/bhashantar/bhashantar.log.*"
)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an audio file and print its transcription and translation
    ///
    /// The file must be MP3 or WAV and at most 10MB. Without --language the
    /// default from the config file is used, otherwise you are asked to pick one.
    #[command(visible_alias = "p")]
    Process {
        /// Path to the audio file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target language code (en, hi-IN, mr-IN, gu-IN, ta-IN, te-IN)
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,

        /// Processing endpoint URL, overriding the config file
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Print the result and display regions as JSON
        #[arg(long)]
        json: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// List supported target languages
    #[command(visible_alias = "l")]
    Languages,

    /// Open configuration file in your preferred editor
    ///
    /// Uses $VISUAL or $EDITOR, falling back to nano/vi.
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries from the application
    ///
    /// Display the last 50 lines of the most recent log file.
    Logs,

    /// Generate shell completion script
    ///
    /// Examples:
    ///   bhashantar completions bash > bhashantar.bash
    ///   bhashantar completions zsh > _bhashantar
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the main application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't need logging
    match &cli.command {
        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "bhashantar", &mut io::stdout());
            return Ok(());
        }
        Commands::Logs => return commands::handle_logs(),
        _ => {}
    }

    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Process {
            file,
            language,
            endpoint,
            json,
            output,
        } => {
            commands::handle_process(commands::ProcessOptions {
                file,
                language,
                endpoint,
                json,
                output,
            })
            .await?;
        }
        Commands::Languages => commands::handle_languages()?,
        Commands::Config => commands::handle_config()?,
        Commands::Completions { .. } | Commands::Logs => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}
