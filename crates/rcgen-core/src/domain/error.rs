// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass up through the layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration format
    // ========================================================================
    #[error("Invalid config format: {reason}")]
    InvalidFormat { reason: String },

    // ========================================================================
    // Validation
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },
}

impl DomainError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFormat { reason } => vec![
                format!("Details: {}", reason),
                "The config file must contain a single line: root=<path>".into(),
                "Do not quote the path and do not use '=' inside it".into(),
                "Example: root=src/components".into(),
            ],
            Self::InvalidComponentName { name, .. } => vec![
                format!("'{}' cannot be used as a folder name", name),
                "Pass a plain name without path separators, e.g. -N Badge".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. } => ErrorCategory::Format,
            Self::InvalidComponentName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Validation,
}
