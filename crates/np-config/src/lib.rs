//! native-panic classifier configuration.
//!
//! This crate provides:
//! - A typed [`ClassifierConfig`] for classifier.json
//! - Config resolution (CLI → env → XDG → system → defaults)
//! - Semantic validation

pub mod classifier;
pub mod resolve;
pub mod validate;

use std::path::Path;

pub use classifier::ClassifierConfig;
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use validate::{validate_classifier, ValidationError, ValidationResult};

/// A loaded configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ClassifierConfig,
    pub paths: ConfigPaths,
}

/// Resolve, parse, and validate the classifier configuration.
///
/// Falls back to built-in defaults when no file is found.
pub fn load_config(cli_path: Option<&Path>) -> ValidationResult<LoadedConfig> {
    let paths = resolve_config(cli_path);

    let config = match &paths.classifier {
        Some(path) => {
            tracing::debug!(path = %path.display(), source = %paths.classifier_source, "loading classifier config");
            ClassifierConfig::from_file(path)?
        }
        None => {
            tracing::debug!("no classifier config found, using builtin defaults");
            ClassifierConfig::default()
        }
    };

    validate_classifier(&config)?;

    Ok(LoadedConfig { config, paths })
}
