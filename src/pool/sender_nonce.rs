//! `SenderNonceIndex` (spec §2.2): per-sender `nonce -> TransactionInfo`,
//! supporting replace-by-fee and next-executable-nonce distance queries.

use std::collections::{BTreeMap, HashMap};

use crate::{
    identifier::SenderId,
    transaction::{PoolTransaction, TransactionInfo},
};

#[derive(Debug, Default)]
pub struct SenderNonceIndex<T: PoolTransaction> {
    by_sender: HashMap<SenderId, BTreeMap<u64, TransactionInfo<T>>>,
}

impl<T: PoolTransaction> SenderNonceIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sender: SenderId, nonce: u64) -> Option<&TransactionInfo<T>> {
        self.by_sender.get(&sender)?.get(&nonce)
    }

    /// Inserts `info` at `(sender, nonce)`, returning whatever previously
    /// occupied that slot (the incumbent a replacement displaces).
    pub fn insert(
        &mut self,
        sender: SenderId,
        nonce: u64,
        info: TransactionInfo<T>,
    ) -> Option<TransactionInfo<T>> {
        self.by_sender.entry(sender).or_default().insert(nonce, info)
    }

    pub fn remove(&mut self, sender: SenderId, nonce: u64) -> Option<TransactionInfo<T>> {
        let map = self.by_sender.get_mut(&sender)?;
        let removed = map.remove(&nonce);
        if map.is_empty() {
            self.by_sender.remove(&sender);
        }
        removed
    }

    pub fn contains(&self, sender: SenderId, nonce: u64) -> bool {
        self.by_sender.get(&sender).map_or(false, |m| m.contains_key(&nonce))
    }

    /// `tx.nonce - expected_next_nonce`, clamped at zero (spec §3: "may be
    /// negative only transiently during reorgs; implementations may clamp at
    /// zero").
    pub fn distance_from_next_nonce(nonce: u64, expected_next_nonce: u64) -> u64 {
        nonce.saturating_sub(expected_next_nonce)
    }
}
