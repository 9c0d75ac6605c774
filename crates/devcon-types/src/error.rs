//! Error types for the dev console.
//!
//! The console engine itself never fails for expected inputs (empty or
//! whitespace-only messages are normalized, unknown commands are a `false`
//! return). These errors cover the surrounding plumbing: configuration
//! loading and host I/O.

use std::io;

/// Errors produced by the dev-console crates.
#[derive(Debug, thiserror::Error)]
pub enum DevconError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DevconError>;
