//! Shared types for native-panic.
//!
//! This crate provides the types every other native-panic crate speaks:
//! - The [`Subsystem`] tag naming which integration point failed
//! - The enriched [`NativePanic`] error produced once a panic is confirmed
//! - Failure inputs handed over by collaborators ([`ProcessResult`], [`ModuleError`])
//! - The unified [`Error`] type and its structured JSON form

pub mod consts;
pub mod error;
pub mod failure;
pub mod panic;
pub mod subsystem;

pub use error::{as_native_panic, is_native_panic, Error, ErrorCategory, Result, StructuredError};
pub use failure::{ModuleError, ProcessResult};
pub use panic::NativePanic;
pub use subsystem::Subsystem;
