//! Configuration management for bhashantar.
//!
//! Configuration lives in `~/.config/bhashantar/bhashantar.toml` and covers the
//! processing endpoint, the default target language and display options.

pub mod file;

pub use file::BhashantarConfig;
