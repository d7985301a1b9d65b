//! Error type shared by the library and the CLI.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by [`crate::Formatter`] and the configuration loader.
///
/// Unresolvable references (unknown users, unknown emoji, unclosed markers)
/// are never errors; they fall back to literal text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input handed to the formatter was not text.
    #[error("text supplied to the formatter must be a string")]
    NotText,

    /// A registry payload had the wrong shape.
    #[error("invalid {what} registration: expected a JSON object")]
    InvalidRegistration { what: &'static str },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
