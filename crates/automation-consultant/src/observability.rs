//! # Observability
//!
//! One-call setup of tracing output for applications embedding a consultation
//! session. The library itself only emits events; it never installs a
//! subscriber on its own.
//!
//! `log` records (emitted by [`crate::extract`]) are forwarded into the same
//! subscriber.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Configuration for initializing the observability system.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// The maximum level captured for this crate.
    pub level: Level,
    /// The target for the logs.
    pub target: LogTarget,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            target: LogTarget::default(),
        }
    }
}

/// Defines the output target for logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// Log to the console (stdout).
    #[default]
    Console,
    /// Log to a file.
    File(String),
}

/// Builds the filter used by [`init`]: `RUST_LOG` plus this crate at `level`.
pub fn filter_for(level: Level) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive(format!("automation_consultant={}", level).parse()?))
}

/// Initializes the global tracing subscriber.
///
/// Call once at startup. Fails if a global subscriber is already set or the
/// log file cannot be created.
pub fn init(config: ObservabilityConfig) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry().with(filter_for(config.level)?);

    match config.target {
        LogTarget::Console => {
            let layer = fmt::layer().with_writer(std::io::stdout);
            subscriber.with(layer).try_init()?;
        }
        LogTarget::File(path) => {
            let file = std::fs::File::create(path)?;
            let layer = fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false);
            subscriber.with(layer).try_init()?;
        }
    };

    Ok(())
}
