//! Harness configuration: built-in defaults, optionally overlaid by a JSON
//! file. Command-line and environment overrides are applied by the binary.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use node_pool::DEFAULT_CAPACITY;

use crate::scenario::Scenario;
use crate::SelfTestError;

/// Default result log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "test_results.log";

/// Which scenarios to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    /// Initialization, sentinel protection, out-of-range read.
    #[default]
    Standard,
    /// Standard suite plus write/read-back and upper-bound write.
    Extended,
}

impl Suite {
    /// Scenarios in execution order.
    pub fn scenarios(self) -> &'static [Scenario] {
        match self {
            Suite::Standard => &Scenario::STANDARD,
            Suite::Extended => &Scenario::EXTENDED,
        }
    }

    /// Smallest pool capacity the suite can run against.
    pub fn min_capacity(self) -> usize {
        match self {
            Suite::Standard => 1,
            // Needs one writable slot past the sentinel.
            Suite::Extended => 2,
        }
    }
}

/// Self-test configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfTestConfig {
    /// Slot count of the pool under test.
    pub capacity: NonZeroUsize,
    /// Append-only result log.
    pub log_path: PathBuf,
    /// Scenario suite.
    pub suite: Suite,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            suite: Suite::default(),
        }
    }
}

impl SelfTestConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SelfTestError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| SelfTestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| SelfTestError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SelfTestError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject combinations the harness cannot run.
    pub fn validate(&self) -> Result<(), SelfTestError> {
        let min = self.suite.min_capacity();
        if self.capacity.get() < min {
            return Err(SelfTestError::InvalidConfig(format!(
                "{:?} suite needs capacity >= {min}, got {}",
                self.suite, self.capacity
            )));
        }
        Ok(())
    }
}
