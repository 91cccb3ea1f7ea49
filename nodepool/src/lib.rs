//! # Node Pool
//!
//! Fixed-capacity slot store with a read-only sentinel slot.
//!
//! ## Contract
//! - Slot 0 is a sentinel: it starts at zero and is never written.
//! - Every access is bounds-checked before it reaches the slots.
//! - Every operation returns a [`ResultCode`]; nothing panics on bad input.
//! - The slot buffer is allocated once and never grows.
//!
//! ## Example
//!
//! ```rust
//! use node_pool::{NodePool, ResultCode};
//!
//! let mut pool = NodePool::new();
//! assert_eq!(pool.verify_initialized(), ResultCode::None);
//!
//! assert_eq!(pool.set(0, 999), ResultCode::SentinelAccessAttempt);
//! assert_eq!(pool.set(5, 42), ResultCode::None);
//! assert_eq!(pool.get(5), (ResultCode::None, 42));
//! assert_eq!(pool.get(1999), (ResultCode::OutOfRangeOnSet, 0));
//! ```

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

mod code;
mod medium;
mod store;

pub use code::{label_for_raw, PoolError, ResultCode, UNKNOWN_LABEL};
pub use medium::{HeapSlots, SlotMedium};
pub use store::NodePool;

/// Slot count of [`NodePool::new`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Index of the read-only sentinel slot.
pub const SENTINEL_INDEX: usize = 0;
