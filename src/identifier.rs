//! Sender interning and the `(sender, nonce)` transaction identifier.
//!
//! Mirrors the split `order-pool` re-exports from its own `identifier`
//! module (`identifier::{SenderId, TransactionId}`): addresses are 20 bytes
//! and expensive to carry and compare inside every ordered-set key, so each
//! sender seen by the pool is interned once to a small copyable id.

use std::collections::HashMap;

use alloy_primitives::Address;

/// Interned identifier for a transaction sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SenderId(u64);

impl SenderId {
    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Identifies a transaction by the (sender, nonce) pair the sender-nonce
/// index keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionId {
    pub sender: SenderId,
    pub nonce: u64,
}

impl TransactionId {
    pub fn new(sender: SenderId, nonce: u64) -> Self {
        Self { sender, nonce }
    }

    /// The id of this transaction's ancestor (`nonce - 1`), if any.
    pub fn unchecked_ancestor(&self) -> Option<Self> {
        (self.nonce != 0).then(|| Self { sender: self.sender, nonce: self.nonce - 1 })
    }
}

/// Interns [`Address`] values into [`SenderId`]s.
///
/// A sender keeps the same id for the lifetime of the pool process; ids are
/// never reused even after every transaction of a sender has been removed,
/// since a stale id outliving its sender's last transaction does no harm and
/// reuse would risk aliasing a removed sender's id onto a new one observed
/// concurrently.
#[derive(Debug, Default)]
pub struct SenderIdentifiers {
    ids: HashMap<Address, SenderId>,
    next: u64,
}

impl SenderIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `sender`, interning it if this is the first time
    /// it has been seen.
    pub fn sender_id_or_create(&mut self, sender: Address) -> SenderId {
        if let Some(id) = self.ids.get(&sender) {
            return *id;
        }
        let id = SenderId(self.next);
        self.next += 1;
        self.ids.insert(sender, id);
        id
    }

    /// Returns the id for `sender` if it has already been interned.
    pub fn sender_id(&self, sender: &Address) -> Option<SenderId> {
        self.ids.get(sender).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_stably() {
        let mut ids = SenderIdentifiers::new();
        let a = Address::repeat_byte(1);
        let b = Address::repeat_byte(2);

        let a_id = ids.sender_id_or_create(a);
        let b_id = ids.sender_id_or_create(b);
        assert_ne!(a_id, b_id);
        assert_eq!(a_id, ids.sender_id_or_create(a));
        assert_eq!(ids.sender_id(&a), Some(a_id));
        assert_eq!(ids.sender_id(&Address::repeat_byte(3)), None);
    }

    #[test]
    fn ancestor_of_zero_nonce_is_none() {
        let id = TransactionId::new(SenderId::new(0), 0);
        assert!(id.unchecked_ancestor().is_none());
        let id = TransactionId::new(SenderId::new(0), 5);
        assert_eq!(id.unchecked_ancestor(), Some(TransactionId::new(SenderId::new(0), 4)));
    }
}
