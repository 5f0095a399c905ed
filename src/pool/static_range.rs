//! `StaticRangeSet` (spec §2.3 / §4.1): the ordered set of transactions
//! whose effective priority fee equals their declared tip because the cap
//! does not bind at the current base fee.

use std::collections::BTreeMap;

use crate::{
    ordering::StaticPriorityKey,
    transaction::{PoolTransaction, TransactionInfo},
};

/// Ordered by [`StaticPriorityKey`]; greatest key first (spec §4.1's
/// "highest first" comparator).
#[derive(Debug)]
pub struct StaticRangeSet<T: PoolTransaction> {
    by_key: BTreeMap<StaticPriorityKey, TransactionInfo<T>>,
}

impl<T: PoolTransaction> Default for StaticRangeSet<T> {
    fn default() -> Self {
        Self { by_key: BTreeMap::new() }
    }
}

impl<T: PoolTransaction> StaticRangeSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: StaticPriorityKey, info: TransactionInfo<T>) {
        self.by_key.insert(key, info);
    }

    pub fn remove(&mut self, key: &StaticPriorityKey) -> Option<TransactionInfo<T>> {
        self.by_key.remove(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// The worst-ranked member: the tail of the ordering, i.e. the smallest
    /// key. Used by overflow eviction (spec §4.5).
    pub fn tail(&self) -> Option<(&StaticPriorityKey, &TransactionInfo<T>)> {
        self.by_key.iter().next()
    }

    /// The best candidate strictly ranked below `after` (or the overall
    /// best, if `after` is `None`). Used by the merged iterator (spec §4.4)
    /// to advance its static cursor one step at a time across separate lock
    /// acquisitions, rather than holding a borrowed iterator alive across
    /// them.
    pub fn best_candidate(
        &self,
        after: Option<StaticPriorityKey>,
    ) -> Option<(StaticPriorityKey, TransactionInfo<T>)> {
        let found = match after {
            Some(key) => self.by_key.range(..key).next_back(),
            None => self.by_key.iter().next_back(),
        };
        found.map(|(key, info)| (*key, info.clone()))
    }

    /// Drains every member for which `predicate` holds, in arbitrary order.
    /// Used by `update_base_fee` to collect migrants before reinserting them
    /// into the other range set (spec §4.7 / design note 9's "collect then
    /// move" discipline — never mutate the set being scanned).
    pub fn drain_matching(
        &mut self,
        mut predicate: impl FnMut(&TransactionInfo<T>) -> bool,
    ) -> Vec<(StaticPriorityKey, TransactionInfo<T>)> {
        let matching: Vec<StaticPriorityKey> = self
            .by_key
            .iter()
            .filter(|(_, info)| predicate(info))
            .map(|(key, _)| *key)
            .collect();
        matching
            .into_iter()
            .filter_map(|key| self.by_key.remove(&key).map(|info| (key, info)))
            .collect()
    }
}
