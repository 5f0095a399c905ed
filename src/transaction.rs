//! The external transaction contract and the pool's immutable wrapper
//! around it.

use std::{fmt, sync::Arc, time::Instant};

use alloy_primitives::{Address, TxHash};

use crate::identifier::TransactionId;

/// Where a transaction was submitted from.
///
/// Generalizes spec §3's bare `local: bool` the way the teacher's
/// `OrderOrigin` does (`order-pool/src/validate/mod.rs`'s
/// `origin: OrderOrigin` field on `ValidPoolTransaction`): callers get a
/// named type instead of a bare bool at every call site, with the same
/// information spec §4.1's comparator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionOrigin {
    /// Submitted by this node's own client/wallet.
    Local,
    /// Received from the network.
    External,
}

impl TransactionOrigin {
    /// Whether the transaction originated locally; locals rank above
    /// remotes in both range-set comparators (spec §4.1).
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

/// The contract a transaction type must satisfy to be held by the pool
/// (spec §3 "Transaction (external)").
///
/// The pool makes no assumption about the concrete transaction encoding; it
/// only needs these fields and the derived effective-fee computation.
pub trait PoolTransaction: fmt::Debug + Send + Sync + 'static {
    /// 32-byte transaction identifier.
    fn hash(&self) -> TxHash;
    /// Sending address.
    fn sender(&self) -> Address;
    /// Transaction nonce.
    fn nonce(&self) -> u64;
    /// Legacy gas price. For EIP-1559 transactions this is unused by the
    /// effective-fee computation but implementations may still report a
    /// sensible value (e.g. `max_fee_per_gas`) for display purposes.
    fn gas_price(&self) -> u128;
    /// Declared max priority fee (tip) per gas, if this is an EIP-1559
    /// transaction.
    fn max_priority_fee_per_gas(&self) -> Option<u128>;
    /// Declared max fee per gas, if this is an EIP-1559 transaction.
    fn max_fee_per_gas(&self) -> Option<u128>;
    /// Heap-allocated size estimate, used only for the byte-accounting
    /// extension (`SPEC_FULL.md` §4) layered on top of spec §4.5's
    /// count-based eviction trigger.
    fn size(&self) -> usize;

    /// Whether this is an EIP-1559 (max-fee/max-priority-fee) transaction.
    fn is_eip1559(&self) -> bool {
        self.max_fee_per_gas().is_some()
    }

    /// The cap that determines `DynamicRangeSet` ordering (spec §4.1):
    /// `max_fee_per_gas` if present, otherwise the legacy `gas_price`.
    fn cap_per_gas(&self) -> u128 {
        self.max_fee_per_gas().unwrap_or_else(|| self.gas_price())
    }

    /// `effective_priority_fee_per_gas(base_fee)` from spec §3.
    ///
    /// For EIP-1559 transactions: `min(max_priority_fee, max_fee - base_fee)`
    /// when `base_fee <= max_fee`; if the base fee exceeds the fee cap the
    /// transaction is non-executable at that base fee, and this returns the
    /// sentinel minimum (`0`) rather than an undefined value, per spec
    /// §4.4's non-executable edge case.
    ///
    /// For legacy transactions: `gas_price - base_fee`, floored at zero.
    fn effective_priority_fee_per_gas(&self, base_fee: u64) -> u128 {
        let base_fee = base_fee as u128;
        match (self.max_priority_fee_per_gas(), self.max_fee_per_gas()) {
            (Some(tip), Some(max_fee)) => {
                if base_fee > max_fee {
                    0
                } else {
                    tip.min(max_fee - base_fee)
                }
            }
            _ => self.gas_price().saturating_sub(base_fee),
        }
    }
}

/// Spec §3's static-range predicate: a transaction is in static range iff it
/// declares a max priority fee and the cap does not bind at `base_fee`.
///
/// Absent `base_fee` (pre-1559 chain head) puts every transaction in the
/// dynamic set by construction (spec §4.4): the comparison is never made
/// implicit by treating `None` as `0`, it is handled as its own case, per
/// the design note on `Optional<Long>` base fee comparisons.
pub fn is_in_static_range<T: PoolTransaction + ?Sized>(tx: &T, base_fee: Option<u64>) -> bool {
    let Some(base_fee) = base_fee else { return false };
    match tx.max_priority_fee_per_gas() {
        Some(tip) => tx.effective_priority_fee_per_gas(base_fee) >= tip,
        None => false,
    }
}

/// Immutable per-transaction record held by the pool (spec §3
/// "TransactionInfo").
///
/// Everything a comparator needs — `local`, `sequence`,
/// `distance_from_next_nonce` — is frozen in here at construction, following
/// design note 9's discipline (a): freeze comparator inputs rather than
/// re-deriving them from state that can move while the transaction sits in
/// an ordered set.
pub struct TransactionInfo<T: PoolTransaction> {
    transaction: Arc<T>,
    id: TransactionId,
    sequence: u64,
    origin: TransactionOrigin,
    arrival_time: Instant,
    distance_from_next_nonce: u64,
}

impl<T: PoolTransaction> TransactionInfo<T> {
    pub fn new(
        transaction: Arc<T>,
        id: TransactionId,
        sequence: u64,
        origin: TransactionOrigin,
        arrival_time: Instant,
        distance_from_next_nonce: u64,
    ) -> Self {
        Self { transaction, id, sequence, origin, arrival_time, distance_from_next_nonce }
    }

    pub fn transaction(&self) -> &T {
        &self.transaction
    }

    pub fn transaction_arc(&self) -> Arc<T> {
        Arc::clone(&self.transaction)
    }

    pub fn hash(&self) -> TxHash {
        self.transaction.hash()
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn origin(&self) -> TransactionOrigin {
        self.origin
    }

    pub fn is_local(&self) -> bool {
        self.origin.is_local()
    }

    pub fn arrival_time(&self) -> Instant {
        self.arrival_time
    }

    /// Distance from the sender's next executable nonce, frozen at
    /// insertion (spec §3 "SenderNonceIndex").
    pub fn distance_from_next_nonce(&self) -> u64 {
        self.distance_from_next_nonce
    }

    pub fn is_in_static_range(&self, base_fee: Option<u64>) -> bool {
        is_in_static_range(&*self.transaction, base_fee)
    }
}

impl<T: PoolTransaction> fmt::Debug for TransactionInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionInfo")
            .field("hash", &self.hash())
            .field("id", &self.id)
            .field("sequence", &self.sequence)
            .field("origin", &self.origin)
            .field("distance_from_next_nonce", &self.distance_from_next_nonce)
            .finish()
    }
}

impl<T: PoolTransaction> Clone for TransactionInfo<T> {
    fn clone(&self) -> Self {
        Self {
            transaction: Arc::clone(&self.transaction),
            id: self.id,
            sequence: self.sequence,
            origin: self.origin,
            arrival_time: self.arrival_time,
            distance_from_next_nonce: self.distance_from_next_nonce,
        }
    }
}
