//! Classifier configuration (classifier.json).

use np_common::consts;
use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, ValidationResult};

/// Values the panic classifiers match against.
///
/// Every field is optional in the file and defaults to the built-in constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Exit code that marks an aborted native process.
    pub panic_exit_code: i32,

    /// Substring of stderr that marks a native panic.
    pub panic_marker: String,

    /// Error name the embedded runtime uses for traps.
    pub trap_name: String,

    /// Stack text used when a trap carries no trace.
    pub backtrace_placeholder: String,

    /// Message used when the fault registry is read while empty.
    pub empty_registry_message: String,

    #[serde(rename = "_comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            panic_exit_code: consts::PANIC_EXIT_CODE,
            panic_marker: consts::PANIC_MARKER.to_string(),
            trap_name: consts::TRAP_NAME.to_string(),
            backtrace_placeholder: consts::BACKTRACE_PLACEHOLDER.to_string(),
            empty_registry_message: consts::EMPTY_REGISTRY_MESSAGE.to_string(),
            comment: None,
        }
    }
}

impl ClassifierConfig {
    /// Load the configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_str(&content)
    }

    /// Parse the configuration from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Serialize to pretty JSON, as written to classifier.json.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
