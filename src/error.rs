//! Error and outcome types returned by the pool.

use alloy_primitives::TxHash;

/// Outcome of [`crate::pool::PriorityMempool::add`].
///
/// These are everyday, expected values rather than failures: admission is
/// allowed to be refused for reasons that say nothing about the caller doing
/// anything wrong (duplicate submission, a stale replacement, a nonce too far
/// ahead of what the sender-nonce tracker currently allows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddedStatus {
    /// The transaction was inserted into the pool.
    Added,
    /// A transaction with this hash is already known to the pool.
    AlreadyKnown,
    /// A transaction already occupies (sender, nonce) and the incoming one
    /// did not clear the [`crate::config::PriceBumpConfig`] bump.
    LowerThanReplacementGasPrice,
    /// The nonce is further ahead of the sender's next expected nonce than
    /// the sender-nonce tracker allows.
    NonceTooFarInFuture,
    /// The transaction would be evicted immediately at the current pool
    /// state; rejected rather than admitted and dropped on the next
    /// overflow check.
    RejectedUnderpriced,
}

impl AddedStatus {
    /// Whether this outcome means the transaction now lives in the pool.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Reason a transaction left the pool, used for metrics and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemovalReason {
    /// Included in a mined block.
    AddedToBlock,
    /// Invalidated outside of block inclusion (e.g. explicit caller removal).
    Invalidated,
    /// Evicted to enforce [`crate::config::PoolConfig::max_pending_transactions`].
    EvictedOverflow,
    /// Superseded by a higher-fee transaction at the same (sender, nonce).
    Replaced,
}

impl RemovalReason {
    /// The metric label for this reason, matching the closed set in spec §6:
    /// `{added_to_block, invalidated, evicted_overflow, replaced}`.
    pub fn as_metric_label(&self) -> &'static str {
        match self {
            Self::AddedToBlock => "added_to_block",
            Self::Invalidated => "invalidated",
            Self::EvictedOverflow => "evicted_overflow",
            Self::Replaced => "replaced",
        }
    }
}

/// Programmer-error conditions: these indicate a bug in the caller or in the
/// pool's own invariant maintenance, not an everyday admission outcome.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The merged iterator (spec §4.4) was advanced after it was already
    /// exhausted, or drained without holding the pool mutex as its contract
    /// requires.
    #[error("prioritized transaction iterator driven past exhaustion")]
    IteratorExhausted,
    /// Invariant checks (I1-I5) failed; the pool attempted a full rebuild of
    /// the range sets from the hash index.
    #[error("pool invariants violated, rebuilt range sets from hash index: {0}")]
    InvariantViolation(String),
    /// `remove` was called for a hash that both the hash index and both range
    /// sets disagree about.
    #[error("transaction {0} present in hash index but not in either range set")]
    Desynchronized(TxHash),
}

pub type PoolResult<T> = Result<T, PoolError>;
