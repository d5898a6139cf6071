//! Subprocess panic classification.
//!
//! A native binary that panics exits with code 101. Some invocation paths
//! (shell wrappers, captured output) lose the raw exit code, so the panic
//! marker on stderr is accepted as well.

use std::borrow::Cow;

use np_common::consts::{PANIC_EXIT_CODE, PANIC_MARKER};
use np_common::ProcessResult;

/// Result of a finished external process, as seen by the classifier.
pub trait ProcessOutcome {
    /// Exit code, or `None` when the process was terminated by a signal.
    fn exit_code(&self) -> Option<i32>;

    /// Captured standard error, if any was captured.
    fn stderr(&self) -> Option<Cow<'_, str>>;

    /// Owned copy of the outcome, used when the failure is passed through.
    fn to_process_result(&self) -> ProcessResult {
        ProcessResult {
            exit_code: self.exit_code(),
            stderr: self.stderr().map(Cow::into_owned),
        }
    }
}

impl ProcessOutcome for ProcessResult {
    fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    fn stderr(&self) -> Option<Cow<'_, str>> {
        self.stderr.as_deref().map(Cow::Borrowed)
    }

    fn to_process_result(&self) -> ProcessResult {
        self.clone()
    }
}

impl ProcessOutcome for std::process::Output {
    fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    fn stderr(&self) -> Option<Cow<'_, str>> {
        Some(String::from_utf8_lossy(&self.stderr))
    }
}

impl<T: ProcessOutcome + ?Sized> ProcessOutcome for &T {
    fn exit_code(&self) -> Option<i32> {
        (**self).exit_code()
    }

    fn stderr(&self) -> Option<Cow<'_, str>> {
        (**self).stderr()
    }

    fn to_process_result(&self) -> ProcessResult {
        (**self).to_process_result()
    }
}

/// Returns true if the process terminated by panicking.
///
/// Either the exit code is 101, or stderr contains `"panicked at"`. Missing
/// stderr never matches.
pub fn is_subprocess_panic<O: ProcessOutcome + ?Sized>(outcome: &O) -> bool {
    matches_panic(outcome, PANIC_EXIT_CODE, PANIC_MARKER)
}

pub(crate) fn matches_panic<O: ProcessOutcome + ?Sized>(
    outcome: &O,
    panic_exit_code: i32,
    marker: &str,
) -> bool {
    if outcome.exit_code() == Some(panic_exit_code) {
        return true;
    }
    outcome
        .stderr()
        .is_some_and(|stderr| stderr.contains(marker))
}
