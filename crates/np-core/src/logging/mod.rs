//! Structured logging setup for applications embedding native-panic.
//!
//! The library itself only emits `tracing` events: `debug` for every
//! classification and `warn` for every confirmed panic. This module installs
//! a stderr subscriber for applications that do not bring their own.
//!
//! NP_LOG (or an explicit level) wins over RUST_LOG; RUST_LOG is only
//! consulted when no level was given.

pub mod config;

pub use config::{LogConfig, LogFormat};

use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events the level applies to.
const LOG_TARGETS: [&str; 3] = ["np_core", "np_config", "np_common"];

/// Build the filter for `config`.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    build_filter(config.level, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn build_filter(level: Option<LevelFilter>, rust_log: Option<&str>) -> EnvFilter {
    if level.is_none() {
        if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
            return filter;
        }
    }
    let level = level.unwrap_or(LevelFilter::INFO);
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Install the global subscriber.
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = env_filter(config);

    let result = match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    result.is_ok()
}
