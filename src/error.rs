//! Dispatch errors
//!
//! Failures travel on their own channel instead of being folded into the
//! result text. Each variant renders the exact message callers have always
//! seen, so flattening an error back into a string is lossless.

use thiserror::Error;

/// Errors produced while resolving or running a task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Agent '{0}' not found.")]
    ProviderNotFound(String),

    #[error("Task '{operation}' not found for agent '{provider}'.")]
    OperationNotFound { provider: String, operation: String },

    #[error("Platform {0} not supported.")]
    UnsupportedPlatform(String),

    #[error("Calendar source {0} not supported.")]
    UnsupportedCalendarSource(String),

    #[error("Invalid arguments for task '{operation}': {reason}")]
    InvalidArguments { operation: String, reason: String },
}

impl DispatchError {
    /// Stable machine-readable code for logs and tooling
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::ProviderNotFound(_) => "PROVIDER_NOT_FOUND",
            DispatchError::OperationNotFound { .. } => "OPERATION_NOT_FOUND",
            DispatchError::UnsupportedPlatform(_) => "UNSUPPORTED_PLATFORM",
            DispatchError::UnsupportedCalendarSource(_) => "UNSUPPORTED_CALENDAR_SOURCE",
            DispatchError::InvalidArguments { .. } => "INVALID_ARGUMENTS",
        }
    }

    /// True when the request named something the dispatcher does not know
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DispatchError::ProviderNotFound(_) | DispatchError::OperationNotFound { .. }
        )
    }

    pub(crate) fn invalid_arguments(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        DispatchError::InvalidArguments {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
