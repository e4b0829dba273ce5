use std::path::PathBuf;
use thiserror::Error;

/// Errors that can arise while reading the bundled tracker data.
///
/// None of these cross the public loader boundary: `loader` logs them and
/// hands the caller an empty result instead.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Wrapper around IO errors (permissions, unreadable file, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The data file exists but holds nothing but whitespace.
    #[error("file is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    /// Deserialization failed.
    #[error("malformed data in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A table-of-contents patch tag that is not a dotted version.
    #[error("invalid patch tag: {0}")]
    InvalidPatch(String),
}

impl TrackerError {
    /// Missing and empty files are expected during authoring and only warrant a warning.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, TrackerError::NotFound(_) | TrackerError::EmptyFile(_))
    }
}
