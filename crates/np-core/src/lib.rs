//! Native panic classification and error enrichment.
//!
//! Two stateless classifiers decide whether a failure of an external native
//! component is a panic:
//! - [`subprocess`]: a finished process that exited with the abort code or
//!   printed the panic marker
//! - [`module`]: an embedded-module error carrying the trap name, with its
//!   message recovered from a [`FaultRegistry`]
//!
//! [`triage`] wires both into the classify-then-wrap flow: a confirmed panic
//! becomes [`Error::Panic`](np_common::Error::Panic) carrying a
//! [`NativePanic`](np_common::NativePanic); anything else is passed through
//! unchanged.
//!
//! # Example
//!
//! ```
//! use np_common::{is_native_panic, ProcessResult, Subsystem};
//! use np_core::{PanicContext, PanicTriage};
//!
//! let triage = PanicTriage::new(PanicContext::new(Subsystem::QueryEngineBinaryCli));
//! let result = ProcessResult::exited(101).with_stderr("thread 'main' panicked at src/lib.rs:1");
//!
//! let err = triage.triage_process(&result, "query engine crashed");
//! assert!(is_native_panic(&err));
//! ```

pub mod classifier;
pub mod logging;
pub mod module;
pub mod registry;
pub mod subprocess;
pub mod triage;

pub use classifier::PanicClassifier;
pub use module::{is_embedded_panic, module_diagnostic, ModuleDiagnostic, ModuleTrap};
pub use registry::{FaultRegistry, FaultSource};
pub use subprocess::{is_subprocess_panic, ProcessOutcome};
pub use triage::{PanicContext, PanicTriage};
