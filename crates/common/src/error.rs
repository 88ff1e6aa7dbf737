//! Error types shared across Tutorcast crates.

use std::path::PathBuf;

/// Top-level error type for Tutorcast operations.
#[derive(Debug, thiserror::Error)]
pub enum TutorcastError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TutorcastError.
pub type TutorcastResult<T> = Result<T, TutorcastError>;

impl TutorcastError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }
}

/// Read a UTF-8 text file, mapping a missing file to [`TutorcastError::FileNotFound`].
pub fn read_text_file(path: impl Into<PathBuf>) -> TutorcastResult<String> {
    let path = path.into();
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(TutorcastError::FileNotFound { path })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_file_not_found() {
        let path = std::env::temp_dir().join("tutorcast_definitely_missing_script.txt");
        let _ = std::fs::remove_file(&path);

        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, TutorcastError::FileNotFound { .. }));
        assert!(err.to_string().contains("tutorcast_definitely_missing_script.txt"));
    }

    #[test]
    fn test_helper_messages() {
        assert_eq!(
            TutorcastError::validation("2 issues").to_string(),
            "Validation failed: 2 issues"
        );
    }

    #[test]
    fn test_reading_a_directory_is_an_io_error() {
        let err = read_text_file(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, TutorcastError::Io(_)));
    }
}
