//! Error types for the QuestForce core library.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for all resource and simulation operations.
#[derive(Error, Debug)]
pub enum QuestforceError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Direct lookup of an identifier with no matching record
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },
    /// Anything the caller cannot fix; the message is only ever logged
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// The three failure classes every interface translates errors into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or out-of-domain input
    Validation,
    /// Unknown identifier on direct lookup
    NotFound,
    /// Unexpected failure
    Internal,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> QuestforceError {
        QuestforceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }

    /// The field was absent or empty.
    pub fn required(self) -> QuestforceError {
        let reason = format!("{} is required", self.field);
        self.with_reason(reason)
    }

    /// The field held a value outside its enumerated domain.
    pub fn one_of(self, allowed: &[&str]) -> QuestforceError {
        let reason = format!("must be one of: {}", allowed.join(", "));
        self.with_reason(reason)
    }
}

impl QuestforceError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a resource kind.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates an internal error with a loggable message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classifies the error for interface-level translation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to an internal error.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| QuestforceError::Internal {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for QuestForce operations
pub type Result<T> = std::result::Result<T, QuestforceError>;
