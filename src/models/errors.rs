//! Error types for the vanity hunter
//!
//! Each failure carries a code so log lines can be grepped by category.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - KEYGEN_xxx: key generation
//! - STORAGE_xxx / SERIALIZE_xxx: persistence of matches
//! - PUSH_xxx: notification delivery
//! - CFG_xxx: configuration

use std::fmt;

/// Error raised anywhere between key generation and push delivery
#[derive(Debug)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Lower-level cause, if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a lower-level error under `code`
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Stable code, e.g. `STORAGE_IO`
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "[{}] {}: {}", self.code.as_str(), self.message, source),
            None => write!(f, "[{}] {}", self.code.as_str(), self.message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Failure categories; push codes are the only non-fatal ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Key generation or address derivation failed
    KeygenFailed,
    /// Directory creation or file write failed
    StorageIo,
    /// Account could not be serialized
    SerializeFailed,
    /// Push endpoint rejected or could not be reached
    PushFailed,
    /// Push request timed out
    PushTimeout,
    /// Invalid configuration value
    ConfigInvalidValue,
    /// A generation worker panicked or was cancelled
    WorkerPanicked,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeygenFailed => "KEYGEN_FAILED",
            Self::StorageIo => "STORAGE_IO",
            Self::SerializeFailed => "SERIALIZE_FAILED",
            Self::PushFailed => "PUSH_FAILED",
            Self::PushTimeout => "PUSH_TIMEOUT",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::WorkerPanicked => "WORKER_PANICKED",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// `false` means the generation loop warns and keeps going
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::PushFailed | Self::PushTimeout)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Key generation failed
    pub fn keygen(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::KeygenFailed, msg)
    }

    /// Storage failure with the underlying io error
    pub fn storage(msg: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(ErrorCode::StorageIo, msg, source)
    }

    /// Push endpoint returned an error
    pub fn push_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::PushFailed, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str, reason: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("{}={:?}: {}", key, value, reason),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::StorageIo, "IO error", err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::PushTimeout, "Push request timeout")
        } else {
            Self::with_source(ErrorCode::PushFailed, "Push request failed", err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::SerializeFailed, "JSON serialization error", err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::with_source(ErrorCode::WorkerPanicked, "Generation worker aborted", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::keygen("bad scalar");
        assert_eq!(err.code, ErrorCode::KeygenFailed);
        assert_eq!(err.code_str(), "KEYGEN_FAILED");
        assert_eq!(err.to_string(), "[KEYGEN_FAILED] bad scalar");
    }

    #[test]
    fn test_fatal_classification() {
        assert!(ErrorCode::KeygenFailed.is_fatal());
        assert!(ErrorCode::StorageIo.is_fatal());
        assert!(!ErrorCode::PushFailed.is_fatal());
        assert!(!ErrorCode::PushTimeout.is_fatal());
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::StorageIo);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AppError::invalid_config("VANITY_WORKERS", "abc", "not a number");
        assert_eq!(err.code_str(), "CFG_INVALID_VALUE");
        assert!(err.message.contains("VANITY_WORKERS"));
        assert!(err.message.contains("abc"));
    }
}
