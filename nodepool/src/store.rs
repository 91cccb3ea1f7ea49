//! The slot store: guarded reads and writes over a fixed slot medium.

use core::num::NonZeroUsize;

use tracing::{debug, error, warn};

use crate::code::ResultCode;
use crate::medium::{HeapSlots, SlotMedium};
use crate::{DEFAULT_CAPACITY, SENTINEL_INDEX};

const DEFAULT_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(n) => n,
    None => panic!("DEFAULT_CAPACITY must be > 0"),
};

/// Fixed-capacity slot store with a read-only sentinel at index 0.
///
/// `set` is the only writer and never touches index 0. Every operation
/// reports through a [`ResultCode`]; a failed guard leaves the slots as they
/// were.
#[derive(Debug, Clone)]
pub struct NodePool<M: SlotMedium = HeapSlots> {
    medium: M,
}

impl NodePool<HeapSlots> {
    /// Zero-filled pool with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NONZERO)
    }

    /// Zero-filled pool with `capacity` slots.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_medium(HeapSlots::zeroed(capacity))
    }
}

impl Default for NodePool<HeapSlots> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SlotMedium> NodePool<M> {
    /// Wrap an existing medium. Its contents are taken as-is; run
    /// [`NodePool::verify_initialized`] before trusting them.
    pub fn with_medium(medium: M) -> Self {
        Self { medium }
    }

    /// Number of slots, sentinel included.
    pub fn capacity(&self) -> usize {
        self.medium.capacity().get()
    }

    /// Borrow the backing medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Check that every slot is still zero.
    ///
    /// Only meaningful before the first successful [`NodePool::set`]; after
    /// legitimate writes it reports [`ResultCode::ArrayValueInitializedError`].
    pub fn verify_initialized(&self) -> ResultCode {
        let capacity = self.capacity();
        match (0..capacity).find(|&i| self.medium.load(i) != 0) {
            Some(index) => {
                error!(index, capacity, "slot not zero-initialized");
                ResultCode::ArrayValueInitializedError
            }
            None => ResultCode::None,
        }
    }

    /// Check that the sentinel slot still holds zero.
    pub fn verify_sentinel_intact(&self) -> ResultCode {
        let value = self.medium.load(SENTINEL_INDEX);
        if value != 0 {
            error!(value, "sentinel slot holds a non-zero value");
            return ResultCode::SentinelViolation;
        }
        ResultCode::None
    }

    /// Write `value` into slot `index`, then read it back.
    ///
    /// Checks run in a fixed order: sentinel, then range, then read-back.
    /// Index 0 is always reported as [`ResultCode::SentinelAccessAttempt`],
    /// even when `value` is zero.
    pub fn set(&mut self, index: usize, value: u64) -> ResultCode {
        if index == SENTINEL_INDEX {
            warn!(value, "write to sentinel slot rejected");
            return ResultCode::SentinelAccessAttempt;
        }
        let capacity = self.capacity();
        if index >= capacity {
            warn!(index, capacity, "write past capacity rejected");
            return ResultCode::OutOfRangeOnSet;
        }
        self.medium.store(index, value);
        let stored = self.medium.load(index);
        if stored != value {
            error!(index, value, stored, "slot did not retain written value");
            return ResultCode::SetValueMismatch;
        }
        ResultCode::None
    }

    /// Read slot `index`.
    ///
    /// Out-of-range reads yield `(OutOfRangeOnSet, 0)`. In range, a slot that
    /// was never written reads the same as one explicitly set to zero.
    pub fn get(&self, index: usize) -> (ResultCode, u64) {
        let capacity = self.capacity();
        if index >= capacity {
            debug!(index, capacity, "read past capacity");
            return (ResultCode::OutOfRangeOnSet, 0);
        }
        (ResultCode::None, self.medium.load(index))
    }
}
