//! Fuzz target for embedded-module diagnostics.
//!
//! Tests that diagnostic extraction handles arbitrary traces without panicking
//! and always leads the stack with the registry message.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use np_common::ModuleError;
use np_core::{module_diagnostic, FaultRegistry, ModuleTrap};

#[derive(Debug, Arbitrary)]
struct Input {
    message: Option<String>,
    stack: Option<String>,
}

fuzz_target!(|input: Input| {
    let registry = FaultRegistry::new();
    if let Some(message) = input.message {
        registry.publish(message);
    }

    let mut err = ModuleError::new("RuntimeError", "trap");
    err.stack = input.stack;
    let Ok(trap) = ModuleTrap::try_from(err) else {
        return;
    };

    let diagnostic = module_diagnostic(&trap, &registry);
    assert!(diagnostic.stack.starts_with(&diagnostic.message));
    assert!(registry.is_empty());
});
