//! Self-test scenarios. Each runs against a shared pool and reduces to a
//! single [`ResultCode`]; `None` is a pass.

use node_pool::{NodePool, ResultCode, SlotMedium};

/// Value written by the sentinel protection scenario.
const SENTINEL_PROBE: u64 = 999;
/// Distance past capacity probed by the out-of-range read scenario.
const OUT_OF_RANGE_OFFSET: usize = 999;
/// Value written by the round-trip scenario.
const ROUND_TRIP_VALUE: u64 = 42;

/// A single self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Every slot is zero before first use.
    Initialization,
    /// Writes to slot 0 are rejected and leave it at zero.
    SentinelProtection,
    /// Reads past capacity report out-of-range with a zero value.
    OutOfRangeRead,
    /// A write to the last slot reads back, including a zero write.
    RoundTrip,
    /// Writing at exactly `capacity` is rejected without side effects.
    UpperBoundWrite,
}

impl Scenario {
    /// Default suite.
    pub const STANDARD: [Scenario; 3] = [
        Scenario::Initialization,
        Scenario::SentinelProtection,
        Scenario::OutOfRangeRead,
    ];

    /// Default suite followed by the write-path scenarios.
    pub const EXTENDED: [Scenario; 5] = [
        Scenario::Initialization,
        Scenario::SentinelProtection,
        Scenario::OutOfRangeRead,
        Scenario::RoundTrip,
        Scenario::UpperBoundWrite,
    ];

    /// Identifier written to console and result log.
    pub fn id(self) -> &'static str {
        match self {
            Scenario::Initialization => "NODEPOOL-INIT",
            Scenario::SentinelProtection => "NODEPOOL-001",
            Scenario::OutOfRangeRead => "NODEPOOL-002",
            Scenario::RoundTrip => "NODEPOOL-003",
            Scenario::UpperBoundWrite => "NODEPOOL-004",
        }
    }

    /// Run against `pool`.
    pub fn run<M: SlotMedium>(self, pool: &mut NodePool<M>) -> ResultCode {
        match self {
            Scenario::Initialization => pool.verify_initialized(),
            Scenario::SentinelProtection => sentinel_protection(pool),
            Scenario::OutOfRangeRead => out_of_range_read(pool),
            Scenario::RoundTrip => round_trip(pool),
            Scenario::UpperBoundWrite => upper_bound_write(pool),
        }
    }
}

/// A guard that had to reject but returned `actual` instead.
fn unexpected(actual: ResultCode) -> ResultCode {
    if actual.is_ok() {
        ResultCode::UnexpectedTestValue
    } else {
        actual
    }
}

/// Read `index` and require `(None, want)`.
fn expect_value<M: SlotMedium>(pool: &NodePool<M>, index: usize, want: u64) -> ResultCode {
    match pool.get(index) {
        (ResultCode::None, value) if value == want => ResultCode::None,
        (ResultCode::None, _) => ResultCode::UnexpectedTestValue,
        (code, _) => code,
    }
}

fn sentinel_protection<M: SlotMedium>(pool: &mut NodePool<M>) -> ResultCode {
    if pool.verify_sentinel_intact().is_err() {
        return ResultCode::SentinelViolation;
    }
    let result = pool.set(0, SENTINEL_PROBE);
    if result != ResultCode::SentinelAccessAttempt {
        return unexpected(result);
    }
    pool.verify_sentinel_intact()
}

fn out_of_range_read<M: SlotMedium>(pool: &mut NodePool<M>) -> ResultCode {
    let index = pool.capacity().saturating_add(OUT_OF_RANGE_OFFSET);
    match pool.get(index) {
        (ResultCode::OutOfRangeOnSet, 0) => ResultCode::None,
        (ResultCode::OutOfRangeOnSet, _) => ResultCode::UnexpectedTestValue,
        (code, _) => unexpected(code),
    }
}

fn round_trip<M: SlotMedium>(pool: &mut NodePool<M>) -> ResultCode {
    let index = pool.capacity() - 1;
    for value in [ROUND_TRIP_VALUE, 0] {
        let result = pool.set(index, value);
        if result.is_err() {
            return result;
        }
        let result = expect_value(pool, index, value);
        if result.is_err() {
            return result;
        }
    }
    ResultCode::None
}

fn upper_bound_write<M: SlotMedium>(pool: &mut NodePool<M>) -> ResultCode {
    let capacity = pool.capacity();
    let (_, last_before) = pool.get(capacity - 1);
    let result = pool.set(capacity, 1);
    if result != ResultCode::OutOfRangeOnSet {
        return unexpected(result);
    }
    let result = expect_value(pool, capacity - 1, last_before);
    if result.is_err() {
        return result;
    }
    pool.verify_sentinel_intact()
}
