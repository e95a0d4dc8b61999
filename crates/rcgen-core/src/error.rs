//! Unified error handling for rcgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for rcgen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RcgenError {
    /// Malformed input (config text, component names).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl RcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Format => ErrorCategory::Format,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The config file content is malformed.
    Format,
    /// A user-supplied value is unusable.
    Validation,
    /// The target already exists.
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type RcgenResult<T> = Result<T, RcgenError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn invalid_format_is_format_category() {
        let err: RcgenError = DomainError::InvalidFormat {
            reason: "x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn component_exists_is_conflict() {
        let err: RcgenError = ApplicationError::ComponentExists {
            path: PathBuf::from("src/L0/Badge"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.to_string(), "src/L0/Badge already exists");
    }

    #[test]
    fn suggestions_are_forwarded() {
        let err: RcgenError = DomainError::InvalidFormat {
            reason: "could not find root token".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("root=")));
    }
}
