//! Result-code taxonomy and its diagnostic labels.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label reported for any raw code outside the known set.
pub const UNKNOWN_LABEL: &str = "Unknown_Error";

/// Outcome of a node pool operation.
///
/// Every store operation returns one of these instead of panicking. The
/// discriminants are stable and may be stored or transmitted as raw `u8`s.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResultCode {
    /// Success.
    #[default]
    None = 0,
    /// Slot 0 was observed holding a non-zero value.
    SentinelViolation = 1,
    /// Some slot was non-zero before first use.
    ArrayValueInitializedError = 2,
    /// A write was attempted to slot 0.
    SentinelAccessAttempt = 3,
    /// The index was at or past capacity, on either a write or a read.
    OutOfRangeOnSet = 4,
    /// The value read back after a write differs from the value written.
    SetValueMismatch = 5,
    /// A self-test assertion saw a value it did not expect.
    UnexpectedTestValue = 6,
}

impl ResultCode {
    /// Every known code, in discriminant order.
    pub const ALL: [ResultCode; 7] = [
        ResultCode::None,
        ResultCode::SentinelViolation,
        ResultCode::ArrayValueInitializedError,
        ResultCode::SentinelAccessAttempt,
        ResultCode::OutOfRangeOnSet,
        ResultCode::SetValueMismatch,
        ResultCode::UnexpectedTestValue,
    ];

    /// True for [`ResultCode::None`].
    pub const fn is_ok(self) -> bool {
        matches!(self, ResultCode::None)
    }

    /// True for every code other than [`ResultCode::None`].
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Raw discriminant.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Decode a raw discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(ResultCode::None),
            1 => Some(ResultCode::SentinelViolation),
            2 => Some(ResultCode::ArrayValueInitializedError),
            3 => Some(ResultCode::SentinelAccessAttempt),
            4 => Some(ResultCode::OutOfRangeOnSet),
            5 => Some(ResultCode::SetValueMismatch),
            6 => Some(ResultCode::UnexpectedTestValue),
            _ => None,
        }
    }

    /// Stable human-readable label used in console output and result logs.
    pub const fn label(self) -> &'static str {
        match self {
            ResultCode::None => "None",
            ResultCode::SentinelViolation => "Node_Zero_False",
            ResultCode::ArrayValueInitializedError => "Node_Array_Value_Initialized_Error",
            ResultCode::SentinelAccessAttempt => "Node_Zero_Access_Attempt",
            ResultCode::OutOfRangeOnSet => "Node_Out_Of_Range_On_Set",
            ResultCode::SetValueMismatch => "Node_Set_Value_Mismatch",
            ResultCode::UnexpectedTestValue => "Node_Unexpected_Test_Value",
        }
    }

    /// Convert into a `Result` so callers can propagate failures with `?`.
    pub fn into_result(self) -> Result<(), PoolError> {
        match self {
            ResultCode::None => Ok(()),
            ResultCode::SentinelViolation => Err(PoolError::SentinelViolation),
            ResultCode::ArrayValueInitializedError => Err(PoolError::ArrayValueInitialized),
            ResultCode::SentinelAccessAttempt => Err(PoolError::SentinelAccessAttempt),
            ResultCode::OutOfRangeOnSet => Err(PoolError::OutOfRange),
            ResultCode::SetValueMismatch => Err(PoolError::SetValueMismatch),
            ResultCode::UnexpectedTestValue => Err(PoolError::UnexpectedTestValue),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw code, falling back to [`UNKNOWN_LABEL`].
pub fn label_for_raw(raw: u8) -> &'static str {
    ResultCode::from_raw(raw).map_or(UNKNOWN_LABEL, ResultCode::label)
}

/// Error form of the non-success result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PoolError {
    /// Slot 0 holds a non-zero value.
    #[error("sentinel slot 0 holds a non-zero value")]
    SentinelViolation,
    /// A slot was non-zero before first use.
    #[error("slot array was not zero-initialized")]
    ArrayValueInitialized,
    /// Write attempted to slot 0.
    #[error("write to sentinel slot 0 rejected")]
    SentinelAccessAttempt,
    /// Index at or past capacity.
    #[error("slot index out of range")]
    OutOfRange,
    /// Read-back after write did not match.
    #[error("slot did not retain the written value")]
    SetValueMismatch,
    /// Self-test assertion failure.
    #[error("unexpected value observed during self-test")]
    UnexpectedTestValue,
}

impl PoolError {
    /// The result code this error stands for.
    pub const fn code(self) -> ResultCode {
        match self {
            PoolError::SentinelViolation => ResultCode::SentinelViolation,
            PoolError::ArrayValueInitialized => ResultCode::ArrayValueInitializedError,
            PoolError::SentinelAccessAttempt => ResultCode::SentinelAccessAttempt,
            PoolError::OutOfRange => ResultCode::OutOfRangeOnSet,
            PoolError::SetValueMismatch => ResultCode::SetValueMismatch,
            PoolError::UnexpectedTestValue => ResultCode::UnexpectedTestValue,
        }
    }
}

impl From<PoolError> for ResultCode {
    fn from(err: PoolError) -> Self {
        err.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique_and_stable() {
        let labels: HashSet<_> = ResultCode::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), ResultCode::ALL.len());
        assert!(!labels.contains(UNKNOWN_LABEL));
        assert_eq!(ResultCode::None.label(), "None");
        assert_eq!(ResultCode::OutOfRangeOnSet.to_string(), "Node_Out_Of_Range_On_Set");
    }

    #[test]
    fn raw_codes_decode_to_their_variant() {
        for code in ResultCode::ALL {
            assert_eq!(ResultCode::from_raw(code.raw()), Some(code));
            assert_eq!(label_for_raw(code.raw()), code.label());
        }
    }

    #[test]
    fn unknown_raw_codes_use_catch_all_label() {
        assert_eq!(ResultCode::from_raw(7), None);
        assert_eq!(label_for_raw(7), UNKNOWN_LABEL);
        assert_eq!(label_for_raw(u8::MAX), UNKNOWN_LABEL);
    }

    #[test]
    fn only_none_converts_to_ok() {
        assert_eq!(ResultCode::None.into_result(), Ok(()));
        for code in ResultCode::ALL.into_iter().filter(|c| c.is_err()) {
            let err = code.into_result().unwrap_err();
            assert_eq!(ResultCode::from(err), code);
        }
    }

    #[test]
    fn serializes_by_variant_name() {
        let json = serde_json::to_string(&ResultCode::SentinelAccessAttempt).unwrap();
        assert_eq!(json, "\"SentinelAccessAttempt\"");
        let back: ResultCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResultCode::SentinelAccessAttempt);
    }
}
