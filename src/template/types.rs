//! Template error definitions

use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Undefined template variable: {0}")]
    UndefinedVariable(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Unknown template filter: {0}")]
    UnknownFilter(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
