//! Fuzz target for classifier.json configuration parsing.
//!
//! Tests that JSON classifier configuration parsing and validation handle
//! arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use np_config::{validate_classifier, ClassifierConfig};

fuzz_target!(|data: &str| {
    if let Ok(config) = ClassifierConfig::from_str(data) {
        let _ = validate_classifier(&config);
    }
});
