//! Test outcomes, their console/log formatting, and the sinks they are
//! recorded in.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use node_pool::ResultCode;
use serde::{Deserialize, Serialize};

use crate::SelfTestError;

/// Pass/fail verdict of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Scenario returned `None`.
    Pass,
    /// Scenario returned any other code.
    Fail,
}

impl Verdict {
    fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Scenario identifier.
    pub id: String,
    /// Verdict derived from `code`.
    pub verdict: Verdict,
    /// Code the scenario returned.
    pub code: ResultCode,
}

impl TestOutcome {
    /// Build an outcome from a scenario result.
    pub fn new(id: impl Into<String>, code: ResultCode) -> Self {
        let verdict = if code.is_ok() {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self {
            id: id.into(),
            verdict,
            code,
        }
    }

    /// True when the scenario passed.
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// Result log record: `<id>,<PASS|FAIL>,<label>`.
    pub fn log_line(&self) -> String {
        format!("{},{},{}", self.id, self.verdict.as_str(), self.code.label())
    }
}

/// Console form: `[PASS] <id>` or `[FAIL] <id>: <label>`.
impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Verdict::Pass => write!(f, "[PASS] {}", self.id),
            Verdict::Fail => write!(f, "[FAIL] {}: {}", self.id, self.code.label()),
        }
    }
}

/// Destination for test outcomes. Sinks only record; they never affect
/// the pool under test.
pub trait ResultSink {
    /// Record one outcome.
    fn record(&mut self, outcome: &TestOutcome) -> Result<(), SelfTestError>;
}

/// Append-only result log file, one record per line.
#[derive(Debug)]
pub struct ResultLog {
    path: PathBuf,
    file: File,
}

impl ResultLog {
    /// Open `path` for appending, creating it if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SelfTestError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SelfTestError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    /// Log file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for ResultLog {
    fn record(&mut self, outcome: &TestOutcome) -> Result<(), SelfTestError> {
        writeln!(self.file, "{}", outcome.log_line())
            .and_then(|()| self.file.flush())
            .map_err(|source| SelfTestError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-memory sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    outcomes: Vec<TestOutcome>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded outcomes, oldest first.
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, outcome: &TestOutcome) -> Result<(), SelfTestError> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
