//! Error types for the rename walk.
//!
//! A filename that does not carry the `FFI-` prefix is not an error at all;
//! the transformer simply declines it. Everything below aborts a walk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    /// A prefixed filename that does not split into the expected segments
    #[error("Malformed filename '{filename}': {reason}")]
    Malformed { filename: String, reason: String },

    /// The slot segment is not one of "1".."9"
    #[error("Unknown slot '{slot}' in filename '{filename}'")]
    UnknownSlot { filename: String, slot: String },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl RenameError {
    pub(crate) fn malformed(filename: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            filename: filename.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;
