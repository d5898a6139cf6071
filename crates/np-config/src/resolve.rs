//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI arguments → environment variables → XDG paths → defaults.

use std::path::{Path, PathBuf};

/// Discovered configuration file paths.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to classifier.json (or None if not found).
    pub classifier: Option<PathBuf>,

    /// Source of the classifier config (for diagnostics).
    pub classifier_source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the caller.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/native-panic/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_CONFIG_PATH: &str = "NATIVE_PANIC_CONFIG";
pub const ENV_CONFIG_DIR: &str = "NATIVE_PANIC_CONFIG_DIR";

/// Standard config file name.
pub const CLASSIFIER_FILENAME: &str = "classifier.json";

/// Application name for XDG directories.
const APP_NAME: &str = "native-panic";

/// Resolve the classifier configuration path.
///
/// Resolution order:
/// 1. Explicit path (if provided and present)
/// 2. NATIVE_PANIC_CONFIG environment variable
/// 3. NATIVE_PANIC_CONFIG_DIR environment variable + filename
/// 4. XDG config directory (~/.config/native-panic/)
/// 5. System config (/etc/native-panic/)
/// 6. Built-in defaults (None)
pub fn resolve_config(cli_path: Option<&Path>) -> ConfigPaths {
    let mut paths = ConfigPaths::default();
    paths.classifier = resolve_single_config(
        cli_path,
        ENV_CONFIG_PATH,
        CLASSIFIER_FILENAME,
        &mut paths.classifier_source,
    );
    paths
}

fn resolve_single_config(
    cli_path: Option<&Path>,
    env_var: &str,
    filename: &str,
    source: &mut ConfigSource,
) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        if path.exists() {
            *source = ConfigSource::CliArgument;
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "explicit config path does not exist, continuing resolution");
    }

    if let Ok(env_path) = std::env::var(env_var) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            *source = ConfigSource::Environment;
            return Some(path);
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(filename);
        if path.exists() {
            *source = ConfigSource::Environment;
            return Some(path);
        }
    }

    if let Some(path) = xdg_config_dir().map(|dir| dir.join(filename)) {
        if path.exists() {
            *source = ConfigSource::XdgConfig;
            return Some(path);
        }
    }

    let system_path = system_config_dir().join(filename);
    if system_path.exists() {
        *source = ConfigSource::SystemConfig;
        return Some(system_path);
    }

    *source = ConfigSource::BuiltinDefault;
    None
}

/// Get the XDG config directory for native-panic.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
