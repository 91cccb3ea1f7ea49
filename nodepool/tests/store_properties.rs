use std::num::NonZeroUsize;

use node_pool::{HeapSlots, NodePool, ResultCode};
use proptest::prelude::*;

const CAPACITY: usize = 64;

fn pool() -> NodePool {
    NodePool::with_capacity(NonZeroUsize::new(CAPACITY).unwrap())
}

#[derive(Debug, Clone)]
enum Op {
    Set(usize, u64),
    Get(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CAPACITY * 2, any::<u64>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0..CAPACITY * 2).prop_map(Op::Get),
    ]
}

proptest! {
    #[test]
    fn sentinel_survives_any_call_sequence(ops in prop::collection::vec(op(), 0..64), value in any::<u64>()) {
        let mut pool = pool();
        for op in ops {
            match op {
                Op::Set(i, v) => { let _ = pool.set(i, v); }
                Op::Get(i) => { let _ = pool.get(i); }
            }
            prop_assert_eq!(pool.set(0, value), ResultCode::SentinelAccessAttempt);
            prop_assert_eq!(pool.get(0), (ResultCode::None, 0));
            prop_assert_eq!(pool.verify_sentinel_intact(), ResultCode::None);
        }
    }

    #[test]
    fn out_of_range_access_changes_nothing(index in CAPACITY..usize::MAX, value in any::<u64>(), seed in 1..CAPACITY) {
        let mut pool = pool();
        prop_assert_eq!(pool.set(seed, 17), ResultCode::None);
        let before: HeapSlots = pool.medium().clone();

        prop_assert_eq!(pool.get(index), (ResultCode::OutOfRangeOnSet, 0));
        prop_assert_eq!(pool.set(index, value), ResultCode::OutOfRangeOnSet);
        prop_assert_eq!(pool.medium(), &before);
    }

    #[test]
    fn in_range_write_reads_back(index in 1..CAPACITY, value in any::<u64>()) {
        let mut pool = pool();
        prop_assert_eq!(pool.set(index, value), ResultCode::None);
        prop_assert_eq!(pool.get(index), (ResultCode::None, value));
    }

    #[test]
    fn verification_repeats_without_writes(writes in prop::collection::vec((1..CAPACITY, any::<u64>()), 0..8)) {
        let mut pool = pool();
        for (i, v) in writes {
            let _ = pool.set(i, v);
        }
        let init = pool.verify_initialized();
        let sentinel = pool.verify_sentinel_intact();
        for _ in 0..4 {
            prop_assert_eq!(pool.verify_initialized(), init);
            prop_assert_eq!(pool.verify_sentinel_intact(), sentinel);
        }
        prop_assert_eq!(sentinel, ResultCode::None);
    }
}

#[test]
fn zero_value_and_untouched_slot_are_indistinguishable() {
    let mut pool = pool();
    assert_eq!(pool.set(3, 0), ResultCode::None);
    assert_eq!(pool.get(3), (ResultCode::None, 0));
    assert_eq!(pool.get(4), (ResultCode::None, 0));
    // A zero write still leaves every slot zero.
    assert_eq!(pool.verify_initialized(), ResultCode::None);
}

#[test]
fn into_result_propagates_with_question_mark() {
    fn write_sentinel(pool: &mut NodePool) -> Result<(), node_pool::PoolError> {
        pool.set(0, 1).into_result()?;
        Ok(())
    }
    let mut pool = pool();
    let err = write_sentinel(&mut pool).unwrap_err();
    assert_eq!(err, node_pool::PoolError::SentinelAccessAttempt);
    assert_eq!(err.to_string(), "write to sentinel slot 0 rejected");
}
