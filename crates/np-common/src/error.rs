//! Error types for native-panic.
//!
//! This module provides structured error handling with:
//! - A single [`Error`] enum in which native panics are one variant
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - A JSON form for log capture ([`StructuredError`])
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 21,
//!   "category": "subprocess",
//!   "message": "query engine crashed",
//!   "panic": true,
//!   "subsystem": "QUERY_ENGINE_BINARY_CLI",
//!   "context": { "native_stack": "thread 'main' panicked at src/lib.rs:1" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::{ModuleError, NativePanic, ProcessResult, Subsystem};

/// Result type alias for native-panic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Classifier configuration errors.
    Config,
    /// Failures of an external process.
    Subprocess,
    /// Failures inside an embedded module.
    Module,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Subprocess => write!(f, "subprocess"),
            ErrorCategory::Module => write!(f, "module"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for native-panic.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Subprocess errors (20-29)
    #[error("process failed with {0}")]
    Process(ProcessResult),

    // Native panics (21 for subprocesses, 31 in-process)
    #[error(transparent)]
    Panic(Box<NativePanic>),

    // Embedded module errors (30-39)
    #[error(transparent)]
    Module(ModuleError),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<NativePanic> for Error {
    fn from(panic: NativePanic) -> Self {
        Error::Panic(Box::new(panic))
    }
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Subprocess errors
    /// - 30-39: Embedded module errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::Process(_) => 20,
            Error::Panic(panic) if panic.subsystem().is_in_process() => 31,
            Error::Panic(_) => 21,
            Error::Module(_) => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) => ErrorCategory::Config,
            Error::Process(_) => ErrorCategory::Subprocess,
            Error::Panic(panic) if panic.subsystem().is_in_process() => ErrorCategory::Module,
            Error::Panic(_) => ErrorCategory::Subprocess,
            Error::Module(_) => ErrorCategory::Module,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether this error is a confirmed native panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panic(_))
    }

    /// Narrow to the panic payload, if this is a panic.
    pub fn as_panic(&self) -> Option<&NativePanic> {
        match self {
            Error::Panic(panic) => Some(&**panic),
            _ => None,
        }
    }

    /// Take the panic payload, handing the error back if it is not a panic.
    pub fn into_panic(self) -> std::result::Result<NativePanic, Error> {
        match self {
            Error::Panic(panic) => Ok(*panic),
            other => Err(other),
        }
    }

    /// Subsystem that produced the panic, if this is a panic.
    pub fn subsystem(&self) -> Option<Subsystem> {
        self.as_panic().map(NativePanic::subsystem)
    }
}

/// Returns true if `err` is a native panic, either bare or wrapped in [`Error`].
///
/// Ordinary errors of any other type always yield false.
pub fn is_native_panic(err: &(dyn std::error::Error + 'static)) -> bool {
    as_native_panic(err).is_some()
}

/// Narrow any error value to a [`NativePanic`].
pub fn as_native_panic<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a NativePanic> {
    if let Some(panic) = err.downcast_ref::<NativePanic>() {
        return Some(panic);
    }
    err.downcast_ref::<Error>().and_then(Error::as_panic)
}

/// Structured error response for JSON output.
///
/// Used for log capture and for handing errors to machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is a confirmed native panic.
    pub panic: bool,

    /// Subsystem that panicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<Subsystem>,

    /// Additional structured context (exit code, stack, schema path).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::Process(result) => {
                context.insert("exit_code".to_string(), serde_json::json!(result.exit_code));
                if let Some(stderr) = &result.stderr {
                    context.insert("stderr".to_string(), serde_json::json!(stderr));
                }
            }
            Error::Panic(panic) => {
                context.insert(
                    "native_stack".to_string(),
                    serde_json::json!(panic.native_stack()),
                );
                if !panic.request().is_null() {
                    context.insert("request".to_string(), panic.request().clone());
                }
                if let Some(path) = panic.schema_path() {
                    context.insert("schema_path".to_string(), serde_json::json!(path));
                }
                if let Some(url) = panic.introspection_url() {
                    context.insert("introspection_url".to_string(), serde_json::json!(url));
                }
            }
            Error::Module(module) => {
                context.insert("name".to_string(), serde_json::json!(module.name));
                if let Some(stack) = &module.stack {
                    context.insert("stack".to_string(), serde_json::json!(stack));
                }
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            panic: err.is_panic(),
            subsystem: err.subsystem(),
            context,
        }
    }
}

impl StructuredError {
    /// Add additional context to the error.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }

    /// Serialize to pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn binary_panic() -> NativePanic {
        NativePanic::new(
            "query engine crashed",
            "thread 'main' panicked at src/lib.rs:1",
            json!({"action": "findMany"}),
            Subsystem::QueryEngineBinaryCli,
        )
    }

    #[test]
    fn test_error_code() {
        assert_eq!(Error::Config("test".into()).code(), 10);
        assert_eq!(Error::Process(ProcessResult::exited(1)).code(), 20);
        assert_eq!(Error::from(binary_panic()).code(), 21);
        assert_eq!(Error::Module(ModuleError::new("TypeError", "x")).code(), 30);

        let library = NativePanic::new("boom", "", json!(null), Subsystem::QueryEngineLibraryCli);
        assert_eq!(Error::from(library).code(), 31);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::Config("test".into()).category(), ErrorCategory::Config);
        assert_eq!(Error::from(binary_panic()).category(), ErrorCategory::Subprocess);
        assert_eq!(
            Error::Module(ModuleError::new("TypeError", "x")).category(),
            ErrorCategory::Module
        );
    }

    #[test]
    fn test_panic_narrowing() {
        let err = Error::from(binary_panic());
        assert!(err.is_panic());
        assert_eq!(err.subsystem(), Some(Subsystem::QueryEngineBinaryCli));
        assert_eq!(err.as_panic().unwrap().message(), "query engine crashed");
        assert_eq!(err.into_panic().unwrap(), binary_panic());

        let err = Error::Process(ProcessResult::exited(2));
        assert!(!err.is_panic());
        assert!(err.subsystem().is_none());
        assert!(err.into_panic().is_err());
    }

    #[test]
    fn test_is_native_panic_on_dyn_errors() {
        let bare = binary_panic();
        assert!(is_native_panic(&bare));

        let wrapped = Error::from(binary_panic());
        assert!(is_native_panic(&wrapped));

        let ordinary = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(!is_native_panic(&ordinary));

        let module = ModuleError::new("RuntimeError", "unreachable");
        assert!(!is_native_panic(&module));

        let process = Error::Process(ProcessResult::exited(101));
        assert!(!is_native_panic(&process));
    }

    #[test]
    fn test_panic_display_is_transparent() {
        let err = Error::from(binary_panic());
        assert_eq!(err.to_string(), "query engine crashed");
    }

    #[test]
    fn test_structured_error_from_panic() {
        let panic = binary_panic().with_schema_path("schema.prisma");
        let structured = StructuredError::from(&Error::from(panic));

        assert_eq!(structured.code, 21);
        assert!(structured.panic);
        assert_eq!(structured.subsystem, Some(Subsystem::QueryEngineBinaryCli));
        assert_eq!(
            structured.context.get("native_stack"),
            Some(&json!("thread 'main' panicked at src/lib.rs:1"))
        );
        assert_eq!(structured.context.get("schema_path"), Some(&json!("schema.prisma")));
        assert_eq!(structured.context.get("request"), Some(&json!({"action": "findMany"})));
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::Process(ProcessResult::exited(2).with_stderr("bad flag"));
        let json = StructuredError::from(&err).to_json();

        assert!(json.contains(r#""code":20"#));
        assert!(json.contains(r#""category":"subprocess""#));
        assert!(json.contains(r#""panic":false"#));
        assert!(json.contains(r#""stderr":"bad flag""#));
        assert!(!json.contains("subsystem"));
    }

    #[test]
    fn test_structured_error_with_context() {
        let err = Error::Config("bad".into());
        let structured = StructuredError::from(&err).with_context("file", "classifier.json");
        assert_eq!(structured.context.get("file"), Some(&json!("classifier.json")));
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Subprocess.to_string(), "subprocess");
        assert_eq!(ErrorCategory::Module.to_string(), "module");
    }
}
