//! Unified error handling for Barista Core.
//!
//! This module provides a unified error type that wraps domain errors,
//! with user-actionable suggestions.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Barista Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BaristaError {
    /// Errors from the domain layer (orders that name nothing on the menu).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl BaristaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// Convenient result type alias.
pub type BaristaResult<T> = Result<T, BaristaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert() {
        let err: BaristaError = DomainError::EmptyCondimentName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Domain error"));
    }

    #[test]
    fn unknown_condiment_is_not_found() {
        let err = BaristaError::from(DomainError::UnknownCondiment {
            name: "syrup".into(),
        });
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("barista menu")));
    }
}
