use crate::types::LogLevel;
use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where diagnostics go for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The TUI owns the terminal, so logs are appended to a file instead
    File(PathBuf),
}

impl LogTarget {
    pub fn browse_log_file() -> Self {
        LogTarget::File(std::env::temp_dir().join("catalog.log"))
    }
}

/// `RUST_LOG` wins when set; otherwise only the catalog crates log at `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,catalog_cli={level},catalog_runtime={level},catalog_engine={level}"
        ))
    })
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = env_filter(level);

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
