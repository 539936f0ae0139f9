//! Error types for mediasort

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mediasort operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mediasort
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{path}' is not a valid or existing folder")]
    NotADirectory { path: PathBuf },

    #[error("Date folder '{path}' does not exist")]
    MissingDateFolder { path: PathBuf },

    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("No capture date tag in EXIF data of {path}")]
    ExifMissing { path: PathBuf },

    #[error("Unparseable EXIF capture date '{value}' in {path}")]
    ExifMalformed { path: PathBuf, value: String },

    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
