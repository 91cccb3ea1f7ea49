//! Self-test harness for the node pool: ordered scenarios, a stop-on-first
//! failure runner, and append-only result sinks.
#![deny(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::{SelfTestConfig, Suite};
pub use report::{MemorySink, ResultLog, ResultSink, TestOutcome, Verdict};
pub use runner::{RunSummary, SelfTest};
pub use scenario::Scenario;

/// Harness error surface.
#[derive(Debug, Error)]
pub enum SelfTestError {
    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON for [`SelfTestConfig`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// Config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// Config values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
