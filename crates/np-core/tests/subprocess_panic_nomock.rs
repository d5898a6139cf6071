//! No-mock subprocess classification tests.
//!
//! These spawn real `sh` processes and classify their actual output.

#![cfg(unix)]

use np_common::{is_native_panic, Error, Subsystem};
use np_core::{is_subprocess_panic, PanicContext, PanicTriage, ProcessOutcome};
use std::process::{Command, Output};

fn run_sh(script: &str) -> Output {
    Command::new("sh")
        .arg("-c")
        .arg(script)
        .output()
        .expect("spawn sh")
}

fn fmt_triage() -> PanicTriage {
    PanicTriage::new(PanicContext::new(Subsystem::FmtCli))
}

#[test]
fn test_real_exit_101_is_panic() {
    let output = run_sh("exit 101");
    assert_eq!(output.exit_code(), Some(101));
    assert!(is_subprocess_panic(&output));
}

#[test]
fn test_real_panic_marker_with_other_exit_code() {
    let output = run_sh("echo \"thread 'main' panicked at src/main.rs:3:5:\" >&2; exit 1");
    assert_eq!(output.exit_code(), Some(1));
    assert!(is_subprocess_panic(&output));
}

#[test]
fn test_real_ordinary_failure() {
    let output = run_sh("echo 'error: could not parse schema' >&2; exit 1");
    assert!(!is_subprocess_panic(&output));

    match fmt_triage().triage_process(&output, "format failed") {
        Error::Process(result) => {
            assert_eq!(result.exit_code, Some(1));
            assert_eq!(
                result.stderr.as_deref(),
                Some("error: could not parse schema\n")
            );
        }
        other => panic!("expected pass-through, got {other:?}"),
    }
}

#[test]
fn test_real_success_checks_ok() {
    let output = run_sh("echo formatted");
    assert!(fmt_triage().check_process(&output, "format failed").is_ok());
}

#[test]
fn test_real_panic_is_enriched_with_stderr() {
    let output = run_sh("echo \"thread 'main' panicked at 'boom', src/lib.rs:1\" >&2; exit 101");

    let err = fmt_triage()
        .check_process(&output, "prisma-fmt crashed")
        .unwrap_err();

    assert!(is_native_panic(&err));
    let panic = err.as_panic().unwrap();
    assert_eq!(panic.message(), "prisma-fmt crashed");
    assert_eq!(
        panic.native_stack(),
        "thread 'main' panicked at 'boom', src/lib.rs:1\n"
    );
    assert_eq!(panic.subsystem(), Subsystem::FmtCli);
}

#[test]
fn test_real_signal_without_marker_is_not_panic() {
    let output = run_sh("kill -9 $$");
    assert_eq!(output.exit_code(), None);
    assert!(!is_subprocess_panic(&output));
}
