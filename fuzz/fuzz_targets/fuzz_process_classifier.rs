//! Fuzz target for subprocess panic classification.
//!
//! Tests that classification and triage of arbitrary process results never
//! panic, and that triage agrees with the predicate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use np_common::{ProcessResult, Subsystem};
use np_core::{is_subprocess_panic, PanicContext, PanicTriage};

#[derive(Debug, Arbitrary)]
struct Input {
    exit_code: Option<i32>,
    stderr: Option<String>,
}

fuzz_target!(|input: Input| {
    let result = ProcessResult {
        exit_code: input.exit_code,
        stderr: input.stderr,
    };
    let triage = PanicTriage::new(PanicContext::new(Subsystem::QueryEngineBinaryCli));

    let err = triage.triage_process(&result, "fuzz");
    assert_eq!(err.is_panic(), is_subprocess_panic(&result));
});
