//! `DynamicRangeSet` (spec §2.4 / §4.1): the ordered set of transactions
//! whose declared cap binds at the current base fee, so effective priority
//! fee moves with the base fee even though the set's own key does not.

use std::collections::BTreeMap;

use crate::{
    ordering::DynamicPriorityKey,
    transaction::{PoolTransaction, TransactionInfo},
};

#[derive(Debug)]
pub struct DynamicRangeSet<T: PoolTransaction> {
    by_key: BTreeMap<DynamicPriorityKey, TransactionInfo<T>>,
}

impl<T: PoolTransaction> Default for DynamicRangeSet<T> {
    fn default() -> Self {
        Self { by_key: BTreeMap::new() }
    }
}

impl<T: PoolTransaction> DynamicRangeSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: DynamicPriorityKey, info: TransactionInfo<T>) {
        self.by_key.insert(key, info);
    }

    pub fn remove(&mut self, key: &DynamicPriorityKey) -> Option<TransactionInfo<T>> {
        self.by_key.remove(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn tail(&self) -> Option<(&DynamicPriorityKey, &TransactionInfo<T>)> {
        self.by_key.iter().next()
    }

    /// See [`crate::pool::static_range::StaticRangeSet::best_candidate`].
    pub fn best_candidate(
        &self,
        after: Option<DynamicPriorityKey>,
    ) -> Option<(DynamicPriorityKey, TransactionInfo<T>)> {
        let found = match after {
            Some(key) => self.by_key.range(..key).next_back(),
            None => self.by_key.iter().next_back(),
        };
        found.map(|(key, info)| (*key, info.clone()))
    }

    /// See [`crate::pool::static_range::StaticRangeSet::drain_matching`].
    pub fn drain_matching(
        &mut self,
        mut predicate: impl FnMut(&TransactionInfo<T>) -> bool,
    ) -> Vec<(DynamicPriorityKey, TransactionInfo<T>)> {
        let matching: Vec<DynamicPriorityKey> = self
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
