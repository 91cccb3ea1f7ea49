//! Ordered, stop-on-first-failure scenario runner.

use node_pool::{NodePool, SlotMedium};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::report::{ResultSink, TestOutcome};
use crate::scenario::Scenario;
use crate::SelfTestError;

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Pool capacity the run used.
    pub capacity: usize,
    /// Outcomes in execution order; ends at the first failure.
    pub outcomes: Vec<TestOutcome>,
    /// True when every scenario passed.
    pub passed: bool,
}

impl RunSummary {
    /// Process exit status: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.passed)
    }

    /// The failing outcome, if any.
    pub fn failure(&self) -> Option<&TestOutcome> {
        self.outcomes.iter().find(|o| !o.passed())
    }
}

/// Runs scenarios in order against one pool.
#[derive(Debug, Clone)]
pub struct SelfTest {
    scenarios: Vec<Scenario>,
}

impl SelfTest {
    /// Runner over `scenarios`, in the given order.
    pub fn new(scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        Self {
            scenarios: scenarios.into_iter().collect(),
        }
    }

    /// Scenarios this runner executes.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Run every scenario, recording each outcome in `sink`, and stop at the
    /// first failure. Sink errors abort the run.
    pub fn run<M: SlotMedium>(
        &self,
        pool: &mut NodePool<M>,
        sink: &mut dyn ResultSink,
    ) -> Result<RunSummary, SelfTestError> {
        let mut outcomes = Vec::with_capacity(self.scenarios.len());
        let mut passed = true;
        for scenario in &self.scenarios {
            let outcome = TestOutcome::new(scenario.id(), scenario.run(pool));
            sink.record(&outcome)?;
            passed = outcome.passed();
            if passed {
                info!(id = scenario.id(), "scenario passed");
            } else {
                error!(id = scenario.id(), code = %outcome.code, "scenario failed");
            }
            outcomes.push(outcome);
            if !passed {
                break;
            }
        }
        Ok(RunSummary {
            capacity: pool.capacity(),
            outcomes,
            passed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Suite;
    use crate::report::MemorySink;
    use node_pool::ResultCode;
    use std::num::NonZeroUsize;

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn record(&mut self, _outcome: &TestOutcome) -> Result<(), SelfTestError> {
            Err(SelfTestError::InvalidConfig("sink closed".into()))
        }
    }

    #[test]
    fn standard_suite_passes_and_records_every_outcome() {
        let mut pool = NodePool::new();
        let mut sink = MemorySink::new();
        let summary = SelfTest::new(Suite::Standard.scenarios().iter().copied())
            .run(&mut pool, &mut sink)
            .unwrap();
        assert!(summary.passed);
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.capacity, 1000);
        let ids: Vec<_> = sink.outcomes().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["NODEPOOL-INIT", "NODEPOOL-001", "NODEPOOL-002"]);
        assert_eq!(sink.outcomes(), summary.outcomes.as_slice());
    }

    #[test]
    fn stops_after_first_failure() {
        let mut pool = NodePool::with_capacity(NonZeroUsize::new(8).unwrap());
        assert_eq!(pool.set(4, 1), ResultCode::None);
        let mut sink = MemorySink::new();
        let summary = SelfTest::new(Scenario::EXTENDED)
            .run(&mut pool, &mut sink)
            .unwrap();
        assert!(!summary.passed);
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(sink.outcomes().len(), 1);
        let failure = summary.failure().unwrap();
        assert_eq!(failure.id, "NODEPOOL-INIT");
        assert_eq!(failure.code, ResultCode::ArrayValueInitializedError);
    }

    #[test]
    fn sink_error_aborts_run() {
        let mut pool = NodePool::new();
        let result = SelfTest::new(Scenario::STANDARD).run(&mut pool, &mut FailingSink);
        assert!(matches!(result, Err(SelfTestError::InvalidConfig(_))));
    }

    #[test]
    fn summary_serializes_outcomes() {
        let mut pool = NodePool::new();
        let summary = SelfTest::new(Scenario::STANDARD)
            .run(&mut pool, &mut MemorySink::new())
            .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["passed"], true);
        assert_eq!(json["outcomes"][2]["id"], "NODEPOOL-002");
    }
}
