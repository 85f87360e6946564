// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::condiments::Condiment;

/// Root domain error type.
///
/// Building a beverage chain cannot fail once its parts exist; these errors
/// only arise when an order is described as text (CLI flags, config) and
/// that text does not name anything on the menu.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown condiment '{name}'")]
    UnknownCondiment { name: String },

    #[error("Condiment name is empty")]
    EmptyCondimentName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCondiment { name } => {
                let mut suggestions = vec![
                    format!("'{}' is not on the menu", name),
                    "Available condiments:".into(),
                ];
                suggestions.extend(
                    Condiment::ALL
                        .iter()
                        .map(|c| format!("  • {:<14} - {}", c.as_str(), c.label())),
                );
                suggestions.push("Try: barista menu".into());
                suggestions
            }
            Self::EmptyCondimentName => vec![
                "Condiment names cannot be blank".into(),
                "Example: barista brew --add milk --add whipped-cream".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCondiment { .. } => ErrorCategory::NotFound,
            Self::EmptyCondimentName => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
