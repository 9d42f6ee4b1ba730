//! Unified error types for the images-to-PDF application.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// An image could not be opened or decoded
    ImageDecode { path: PathBuf, reason: String },
    /// The selection file could not be read, written or removed
    StoreIo(String),
    /// The selection file exists but is not a JSON array of paths
    StoreCorrupt(String),
    /// The PDF document could not be encoded or written
    PdfWrite(String),
}

impl AppError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        AppError::ImageDecode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageDecode { path, reason } => {
                write!(f, "cannot decode image {}: {}", path.display(), reason)
            }
            AppError::StoreIo(msg) => write!(f, "selection file error: {}", msg),
            AppError::StoreCorrupt(msg) => write!(f, "selection file is corrupt: {}", msg),
            AppError::PdfWrite(msg) => write!(f, "cannot write PDF: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StoreCorrupt(err.to_string())
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::PdfWrite(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_file() {
        let err = AppError::decode("/tmp/broken.png", "unexpected end of file");
        assert_eq!(
            err.to_string(),
            "cannot decode image /tmp/broken.png: unexpected end of file"
        );
    }

    #[test]
    fn json_errors_become_store_corruption() {
        let json_err = serde_json::from_str::<Vec<String>>("[1, 2").unwrap_err();
        assert!(matches!(AppError::from(json_err), AppError::StoreCorrupt(_)));
    }
}
