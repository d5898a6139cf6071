//! Classification constants.
//!
//! These are the built-in values; `np-config` can override each of them.

/// Exit code a native binary uses when it aborts on a panic.
pub const PANIC_EXIT_CODE: i32 = 101;

/// Marker the native panic handler writes to stderr.
pub const PANIC_MARKER: &str = "panicked at";

/// Error name the embedded-module runtime gives to traps.
pub const TRAP_NAME: &str = "RuntimeError";

/// Stack text used when a trap carries no trace.
pub const BACKTRACE_PLACEHOLDER: &str = "NO_BACKTRACE";

/// Message used when a trap is observed but the fault registry holds nothing.
pub const EMPTY_REGISTRY_MESSAGE: &str = "unknown panic: fault registry was empty";
