//! Backing storage for a node pool.

use core::num::NonZeroUsize;

/// Fixed-length slot storage.
///
/// Implementations never grow or shrink after construction. `load` and
/// `store` are only called with `index < capacity()`; the pool performs the
/// bounds and sentinel checks before reaching the medium.
pub trait SlotMedium {
    /// Number of slots, fixed for the lifetime of the medium.
    fn capacity(&self) -> NonZeroUsize;

    /// Read the slot at `index`.
    fn load(&self, index: usize) -> u64;

    /// Write `value` into the slot at `index`.
    fn store(&mut self, index: usize, value: u64);
}

/// Owned, zero-filled slot buffer allocated once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapSlots {
    capacity: NonZeroUsize,
    slots: Box<[u64]>,
}

impl HeapSlots {
    /// Allocate `capacity` slots, all zero.
    pub fn zeroed(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            slots: vec![0u64; capacity.get()].into_boxed_slice(),
        }
    }

    /// Borrow the raw slot contents.
    pub fn as_slice(&self) -> &[u64] {
        &self.slots
    }
}

impl SlotMedium for HeapSlots {
    fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    fn load(&self, index: usize) -> u64 {
        self.slots[index]
    }

    fn store(&mut self, index: usize, value: u64) {
        self.slots[index] = value;
    }
}
