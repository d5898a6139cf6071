//! Config-driven panic classifier.
//!
//! [`PanicClassifier`] applies the same rules as the free functions in
//! [`subprocess`](crate::subprocess) and [`module`](crate::module), with the
//! matched values taken from a [`ClassifierConfig`].

use np_common::ModuleError;
use np_config::{validate_classifier, ClassifierConfig, ValidationResult};

use crate::module::{self, ModuleDiagnostic, ModuleTrap};
use crate::registry::FaultSource;
use crate::subprocess::{self, ProcessOutcome};

/// Panic classifier for both subprocess and embedded-module failures.
#[derive(Debug, Clone, Default)]
pub struct PanicClassifier {
    config: ClassifierConfig,
}

impl PanicClassifier {
    /// Wrap an already validated config.
    ///
    /// An empty marker here matches every stderr; use [`try_new`](Self::try_new)
    /// for configs that did not come through [`np_config::load_config`].
    pub fn new(config: ClassifierConfig) -> Self {
        PanicClassifier { config }
    }

    /// Validate `config`, then wrap it.
    pub fn try_new(config: ClassifierConfig) -> ValidationResult<Self> {
        validate_classifier(&config)?;
        Ok(PanicClassifier { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// See [`is_subprocess_panic`](crate::is_subprocess_panic).
    pub fn is_subprocess_panic<O: ProcessOutcome + ?Sized>(&self, outcome: &O) -> bool {
        subprocess::matches_panic(outcome, self.config.panic_exit_code, &self.config.panic_marker)
    }

    /// See [`is_embedded_panic`](crate::is_embedded_panic).
    pub fn is_embedded_panic(&self, err: &ModuleError) -> bool {
        err.name == self.config.trap_name
    }

    /// Narrow a module error to a trap, handing ordinary errors back.
    pub fn narrow_trap(&self, err: ModuleError) -> Result<ModuleTrap, ModuleError> {
        ModuleTrap::narrow(err, &self.config.trap_name)
    }

    /// See [`module_diagnostic`](crate::module_diagnostic).
    pub fn module_diagnostic<S: FaultSource + ?Sized>(
        &self,
        trap: &ModuleTrap,
        source: &S,
    ) -> ModuleDiagnostic {
        let message = module::take_or_empty(source, &self.config.empty_registry_message);
        module::build_diagnostic(message, trap.stack(), &self.config.backtrace_placeholder)
    }
}
