// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown render mode '{value}'")]
    InvalidMode { value: String },

    #[error("invalid artifact coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMode { value } => vec![
                format!("'{}' is not a render mode", value),
                "Supported modes:".into(),
                "  • production  (alias: prod, true)".into(),
                "  • development (alias: dev, false)".into(),
            ],
            Self::InvalidCoordinate { reason, .. } => vec![
                format!("Details: {}", reason),
                "Expected groupId:artifactId[:classifier[:type]]".into(),
                "Example: org.example:widget:sources:jar".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMode { .. } | Self::InvalidCoordinate { .. } => ErrorCategory::Validation,
        }
    }
}
