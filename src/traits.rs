//! Trait boundaries to the external collaborators spec §6 lists: validation,
//! account-state lookup, the announce cache, and observer registration all
//! stay outside this core, represented here only as the interfaces it calls
//! into or is called through.

use alloy_primitives::{Address, TxHash};

use crate::{error::RemovalReason, transaction::{PoolTransaction, TransactionInfo}};

/// Supplies the current chain-head header, queried once at pool construction
/// to seed the base fee.
pub trait ChainHeadHeaderSupplier {
    /// The base fee activated at the current chain head, if the fee-market
    /// rule has activated.
    fn base_fee(&self) -> Option<u64>;
}

/// Monotonic clock for arrival-time stamping. Production callers hand in a
/// thin wrapper over [`std::time::Instant::now`]; tests use a fixed clock so
/// scenarios are reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> std::time::Instant;
}

/// The system clock, for production wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }
}

/// Per-sender next-executable-nonce lookup — the "per-sender account-state
/// lookup" external collaborator spec §1 excludes from this core's scope.
pub trait AccountNonceProvider: Send + Sync {
    /// The next nonce this sender is expected to execute, used to compute
    /// `distance_from_next_nonce` for a transaction being admitted.
    fn next_nonce(&self, sender: Address) -> u64;
}

/// Hash-only announce cache the enclosing pool maintains; this core only
/// forwards eviction notices after a successful `add` (spec §4.2 step 5).
pub trait AnnounceCache: Send + Sync {
    fn try_evict_transaction_hash(&self, hash: TxHash);
}

/// Synchronous observer hooks (spec §6: `onTransactionAdded`/
/// `onTransactionDropped`). Default no-op bodies let a caller implement only
/// the hook it cares about.
pub trait PoolObserver<T: PoolTransaction>: Send + Sync {
    fn on_transaction_added(&self, _transaction: &TransactionInfo<T>) {}
    fn on_transaction_dropped(&self, _transaction: &TransactionInfo<T>, _reason: RemovalReason) {}
}
