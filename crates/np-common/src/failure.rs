//! Failure inputs handed over by external collaborators.
//!
//! These are the raw shapes the classifiers inspect. Neither type carries any
//! judgement: a [`ProcessResult`] may or may not be a panic, and so may a
//! [`ModuleError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a finished external-process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Exit code, or `None` if the process was terminated by a signal.
    #[serde(default)]
    pub exit_code: Option<i32>,

    /// Captured standard error, if it was captured at all.
    #[serde(default)]
    pub stderr: Option<String>,
}

impl ProcessResult {
    /// A process that exited with `code`, without captured stderr.
    pub fn exited(code: i32) -> Self {
        ProcessResult {
            exit_code: Some(code),
            stderr: None,
        }
    }

    /// A process that was terminated by a signal.
    pub fn signaled() -> Self {
        ProcessResult::default()
    }

    /// Attach captured stderr.
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// Whether the process exited cleanly.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl std::fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// An error raised while executing inside an embedded compiled module.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{name}: {message}")]
pub struct ModuleError {
    /// Identifying error name given by the module runtime.
    pub name: String,

    /// Human-readable message carried by the error.
    pub message: String,

    /// Newline-delimited trace captured with the error.
    #[serde(default)]
    pub stack: Option<String>,
}

impl ModuleError {
    /// An error with no captured trace.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        ModuleError {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    /// Attach the captured trace text.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
