//! The merged iterator (spec §4.4): a cursor over the two range sets that
//! yields a globally base-fee-aware ranking without materializing their
//! union, the way the pack's reth `pool/best.rs` `BestTransactions` merges
//! its sub-pool iterators.
//!
//! Each step re-acquires the pool mutex rather than holding a borrow across
//! the whole traversal (spec §5 licenses either: "consumed while the caller
//! holds (or re-acquires per step) the lock"), which sidesteps holding a
//! `MutexGuard` and a reference into its contents in the same struct.

use crate::{
    ordering::{DynamicPriorityKey, StaticPriorityKey},
    transaction::{PoolTransaction, TransactionInfo},
};

use super::PriorityMempool;

/// Snapshot boundary markers for the merged traversal: the last key yielded
/// from each side, so the next step resumes strictly below it.
pub struct PrioritizedTransactions<'p, T: PoolTransaction> {
    pub(super) pool: &'p PriorityMempool<T>,
    pub(super) last_static: Option<StaticPriorityKey>,
    pub(super) last_dynamic: Option<DynamicPriorityKey>,
}

impl<'p, T: PoolTransaction> Iterator for PrioritizedTransactions<'p, T> {
    type Item = TransactionInfo<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.pool.inner.lock().expect("lock poisoned");
        let static_candidate = inner.static_range.best_candidate(self.last_static);
        let dynamic_candidate = inner.dynamic_range.best_candidate(self.last_dynamic);
        let base_fee = inner.base_fee.unwrap_or(0);
        drop(inner);

        match (static_candidate, dynamic_candidate) {
            (None, None) => None,
            (Some((key, info)), None) => {
                self.last_static = Some(key);
                Some(info)
            }
            (None, Some((key, info))) => {
                self.last_dynamic = Some(key);
                Some(info)
            }
            (Some((skey, sinfo)), Some((dkey, dinfo))) => {
                let static_fee = sinfo.transaction().effective_priority_fee_per_gas(base_fee);
                let dynamic_fee = dinfo.transaction().effective_priority_fee_per_gas(base_fee);
                // Ties favor the static candidate: dynamic only wins on a
                // strict `>` (spec §4.4).
                if dynamic_fee > static_fee {
                    self.last_dynamic = Some(dkey);
                    Some(dinfo)
                } else {
                    self.last_static = Some(skey);
                    Some(sinfo)
                }
            }
        }
    }
}
