//! Application command handlers for bhashantar.
//!
//! # Commands
//! - `process`: Upload an audio file and print its transcription and translation
//! - `languages`: List supported target languages
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod languages;
pub mod logs;
pub mod process;

pub use config::handle_config;
pub use languages::handle_languages;
pub use logs::handle_logs;
pub use process::{handle_process, ProcessOptions};
