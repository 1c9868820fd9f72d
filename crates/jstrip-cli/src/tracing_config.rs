//! Logging setup for the `jstrip` binary.
//!
//! `JSTRIP_LOG` holds `EnvFilter` directives, with `RUST_LOG` as the
//! fallback. `JSTRIP_LOG_FORMAT` picks `text` (default), `tree` or `json`.
//! When neither filter variable is set no subscriber is installed.
//!
//! ```bash
//! JSTRIP_LOG=debug jstrip src/
//! JSTRIP_LOG=jstrip_emitter=trace JSTRIP_LOG_FORMAT=tree jstrip Foo.java
//! ```
//!
//! Events always go to stderr, so `--stdout` and `--json` output stay clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "JSTRIP_LOG";
pub const LOG_FORMAT_ENV: &str = "JSTRIP_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented spans via `tracing-tree`.
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings through `var`. `None` means logging is off.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = var(LOG_ENV).or_else(|| var(FALLBACK_LOG_ENV))?;
        let format = var(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(LogSettings { directives, format })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// Install the global subscriber described by the environment, if any.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };

    let filter = EnvFilter::builder().parse_lossy(&settings.directives);
    let registry = Registry::default().with(filter);
    let installed = match settings.format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_writer(std::io::stderr)
                    .with_indent_amount(2)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping the subscriber that was already installed");
    }
}
