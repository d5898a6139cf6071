//! Classify-then-wrap entry points.
//!
//! Callers hand the failure of an external operation to [`PanicTriage`]. A
//! confirmed panic comes back as [`Error::Panic`]; every other failure comes
//! back unchanged as [`Error::Process`] or [`Error::Module`].

use np_common::{Error, ModuleError, NativePanic, Subsystem};

use crate::classifier::PanicClassifier;
use crate::registry::FaultSource;
use crate::subprocess::ProcessOutcome;

/// Provenance attached to every panic confirmed by a [`PanicTriage`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanicContext {
    subsystem: Subsystem,
    request: serde_json::Value,
    schema_path: Option<String>,
    schema: Option<String>,
    introspection_url: Option<String>,
}

impl PanicContext {
    pub fn new(subsystem: Subsystem) -> Self {
        PanicContext {
            subsystem,
            request: serde_json::Value::Null,
            schema_path: None,
            schema: None,
            introspection_url: None,
        }
    }

    /// Attach the request/operation that was running.
    pub fn with_request(mut self, request: serde_json::Value) -> Self {
        self.request = request;
        self
    }

    pub fn with_schema_path(mut self, path: impl Into<String>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_introspection_url(mut self, url: impl Into<String>) -> Self {
        self.introspection_url = Some(url.into());
        self
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// Build the panic error for this context.
    pub fn panic(&self, message: impl Into<String>, native_stack: impl Into<String>) -> NativePanic {
        let mut panic = NativePanic::new(message, native_stack, self.request.clone(), self.subsystem);
        if let Some(path) = &self.schema_path {
            panic = panic.with_schema_path(path.clone());
        }
        if let Some(schema) = &self.schema {
            panic = panic.with_schema(schema.clone());
        }
        if let Some(url) = &self.introspection_url {
            panic = panic.with_introspection_url(url.clone());
        }
        panic
    }
}

/// Classifies failures of one integration point and enriches panics.
#[derive(Debug, Clone)]
pub struct PanicTriage {
    classifier: PanicClassifier,
    context: PanicContext,
}

impl PanicTriage {
    /// Triage with the built-in classifier rules.
    pub fn new(context: PanicContext) -> Self {
        Self::with_classifier(PanicClassifier::default(), context)
    }

    pub fn with_classifier(classifier: PanicClassifier, context: PanicContext) -> Self {
        PanicTriage {
            classifier,
            context,
        }
    }

    pub fn classifier(&self) -> &PanicClassifier {
        &self.classifier
    }

    pub fn context(&self) -> &PanicContext {
        &self.context
    }

    /// Classify a failed process.
    ///
    /// A panic keeps the caller's `message` and uses the captured stderr as
    /// its native stack.
    pub fn triage_process<O: ProcessOutcome + ?Sized>(
        &self,
        outcome: &O,
        message: impl Into<String>,
    ) -> Error {
        let panicked = self.classifier.is_subprocess_panic(outcome);
        tracing::debug!(
            subsystem = %self.context.subsystem,
            exit_code = ?outcome.exit_code(),
            panicked,
            "classified subprocess failure"
        );

        if !panicked {
            return Error::Process(outcome.to_process_result());
        }

        let native_stack = outcome.stderr().map(|s| s.into_owned()).unwrap_or_default();
        let panic = self.context.panic(message, native_stack);
        tracing::warn!(
            subsystem = %panic.subsystem(),
            exit_code = ?outcome.exit_code(),
            "native subprocess panicked"
        );
        Error::from(panic)
    }

    /// Check a finished process, turning any failure into an error.
    ///
    /// Exit code 0 without the panic marker is success.
    pub fn check_process<O: ProcessOutcome + ?Sized>(
        &self,
        outcome: &O,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        if outcome.exit_code() == Some(0) && !self.classifier.is_subprocess_panic(outcome) {
            return Ok(());
        }
        Err(self.triage_process(outcome, message))
    }

    /// Classify an error raised inside the embedded module.
    ///
    /// A trap takes its message from `source` exactly once; ordinary errors
    /// leave `source` untouched.
    pub fn triage_module<S: FaultSource + ?Sized>(&self, err: ModuleError, source: &S) -> Error {
        let trap = match self.classifier.narrow_trap(err) {
            Ok(trap) => trap,
            Err(err) => {
                tracing::debug!(
                    subsystem = %self.context.subsystem,
                    name = %err.name,
                    "embedded module error is not a trap"
                );
                return Error::Module(err);
            }
        };

        let diagnostic = self.classifier.module_diagnostic(&trap, source);
        let panic = self.context.panic(diagnostic.message, diagnostic.stack);
        tracing::warn!(
            subsystem = %panic.subsystem(),
            message = %panic.message(),
            "embedded module trapped"
        );
        Error::from(panic)
    }
}
