/// Shared error types for the widget host
///
/// - Standardized error codes for host-level failures (bad events, config)
/// - Categorized by error domain so the host can pick a log severity
/// - Serializable so a failure can be reported back to the page
///
/// Widget-level validation (range parsing) has its own typed errors in the
/// widgets crate; this type covers the bridge around them.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error categories that map to logging severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// The page sent something the widgets cannot act on
    Validation,

    /// An event referenced an element no widget owns
    NotFound,

    /// Startup configuration is unusable
    Configuration,

    /// Unexpected failures, serialization, I/O
    Internal,
}

impl ErrorCategory {
    /// Map error category to log level
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "warn",
            ErrorCategory::NotFound => "debug",
            ErrorCategory::Configuration => "error",
            ErrorCategory::Internal => "error",
        }
    }
}

/// Standard error codes used by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    pub const VALIDATION_INVALID_EVENT: ErrorCode = ErrorCode("VALIDATION_INVALID_EVENT");
    pub const NOT_FOUND_TARGET: ErrorCode = ErrorCode("NOT_FOUND_TARGET");
    pub const CONFIGURATION_INVALID: ErrorCode = ErrorCode("CONFIGURATION_INVALID");
    pub const INTERNAL_SERIALIZATION: ErrorCode = ErrorCode("INTERNAL_SERIALIZATION");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standardized error structure for the host bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    /// Error category (determines log level)
    pub category: ErrorCategory,

    /// Structured error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context (offending line, field name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ServiceError {
    pub fn new(category: ErrorCategory, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            category,
            code: code.as_str().to_string(),
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn invalid_event(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_INVALID_EVENT,
            "Malformed host event",
        )
        .with_context(error.to_string())
    }

    pub fn unknown_target(target: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            ErrorCode::NOT_FOUND_TARGET,
            format!("No widget handles element: {}", target),
        )
    }

    pub fn invalid_config(key: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::Configuration,
            ErrorCode::CONFIGURATION_INVALID,
            format!("Invalid configuration value for {}", key),
        )
        .with_context(reason)
    }

    pub fn serialization_error(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_SERIALIZATION,
            "Serialization error",
        )
        .with_context(error.to_string())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "[{}] {}: {}", self.code, self.message, context)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

pub type Result<T> = std::result::Result<T, ServiceError>;
