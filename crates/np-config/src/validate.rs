//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::ClassifierConfig;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 11,
            ValidationError::MissingField(_) => 12,
            ValidationError::InvalidValue { .. } => 13,
        }
    }
}

impl From<ValidationError> for np_common::Error {
    fn from(err: ValidationError) -> Self {
        np_common::Error::Config(err.to_string())
    }
}

/// Validate the classifier configuration semantically.
pub fn validate_classifier(config: &ClassifierConfig) -> ValidationResult<()> {
    // Exit statuses outside 1..=255 can never be observed as a failure.
    if !(1..=255).contains(&config.panic_exit_code) {
        return Err(ValidationError::InvalidValue {
            field: "panic_exit_code".to_string(),
            message: format!("Must be in [1, 255], got {}", config.panic_exit_code),
        });
    }

    require_non_empty("panic_marker", &config.panic_marker)?;
    require_non_empty("trap_name", &config.trap_name)?;
    require_non_empty("backtrace_placeholder", &config.backtrace_placeholder)?;
    require_non_empty("empty_registry_message", &config.empty_registry_message)?;

    if config.backtrace_placeholder.contains('\n') {
        return Err(ValidationError::InvalidValue {
            field: "backtrace_placeholder".to_string(),
            message: "Must be a single line".to_string(),
        });
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}
