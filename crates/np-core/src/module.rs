//! Embedded-module panic classification and diagnostics.
//!
//! The embedded runtime reports traps (stack overflow, unreachable code,
//! explicit abort) as errors named `RuntimeError`. Errors raised by the
//! surrounding orchestration code carry other names and are not panics.

use np_common::consts::{BACKTRACE_PLACEHOLDER, EMPTY_REGISTRY_MESSAGE, TRAP_NAME};
use np_common::ModuleError;
use serde::{Deserialize, Serialize};

use crate::registry::FaultSource;

/// Returns true if the error is a trap of the embedded module.
pub fn is_embedded_panic(err: &ModuleError) -> bool {
    err.name == TRAP_NAME
}

/// A [`ModuleError`] known to be a trap.
///
/// Only obtainable through classification, so the diagnostic extractor can
/// never be handed an ordinary error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTrap(ModuleError);

impl ModuleTrap {
    pub(crate) fn narrow(err: ModuleError, trap_name: &str) -> Result<Self, ModuleError> {
        if err.name == trap_name {
            Ok(ModuleTrap(err))
        } else {
            Err(err)
        }
    }

    pub fn error(&self) -> &ModuleError {
        &self.0
    }

    pub fn stack(&self) -> Option<&str> {
        self.0.stack.as_deref()
    }

    pub fn into_inner(self) -> ModuleError {
        self.0
    }
}

impl TryFrom<ModuleError> for ModuleTrap {
    type Error = ModuleError;

    fn try_from(err: ModuleError) -> Result<Self, Self::Error> {
        ModuleTrap::narrow(err, TRAP_NAME)
    }
}

/// Displayable message and stack for a trap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDiagnostic {
    pub message: String,
    pub stack: String,
}

/// Build the diagnostic for a trap, taking its message from `source`.
///
/// The stack is the message followed by the trap's own trace minus its first
/// line. Without a trace, `NO_BACKTRACE` is appended as is.
pub fn module_diagnostic<S: FaultSource + ?Sized>(trap: &ModuleTrap, source: &S) -> ModuleDiagnostic {
    let message = take_or_empty(source, EMPTY_REGISTRY_MESSAGE);
    build_diagnostic(message, trap.stack(), BACKTRACE_PLACEHOLDER)
}

pub(crate) fn take_or_empty<S: FaultSource + ?Sized>(source: &S, empty_message: &str) -> String {
    match source.take_message() {
        Some(message) => message,
        None => {
            tracing::warn!("trap observed but the fault registry was empty");
            empty_message.to_string()
        }
    }
}

pub(crate) fn build_diagnostic(
    message: String,
    trace: Option<&str>,
    placeholder: &str,
) -> ModuleDiagnostic {
    let stack = match trace.filter(|trace| !trace.is_empty()) {
        Some(trace) => {
            // The first line only repeats the runtime's generic error name.
            let mut lines = vec![message.as_str()];
            lines.extend(trace.split('\n').skip(1));
            lines.join("\n")
        }
        None => format!("{}\n{}", message, placeholder),
    };

    ModuleDiagnostic { message, stack }
}
