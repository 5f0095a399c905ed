//! A richer event vocabulary layered over the synchronous
//! [`crate::traits::PoolObserver`] hooks spec §6 actually asks for, mirroring
//! the teacher's `FullOrderEvent`/`OrderEvents` pair
//! (`order-pool/src/pool/events.rs`).

use alloy_primitives::TxHash;

use crate::error::RemovalReason;

/// One lifecycle transition for a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionEvent {
    /// Admitted into the pool.
    Added { hash: TxHash, local: bool },
    /// Admitted as a replacement, displacing `replaced`.
    Replaced { hash: TxHash, replaced: TxHash, local: bool },
    /// Left the pool for `reason`.
    Removed { hash: TxHash, local: bool, reason: RemovalReason },
}

impl TransactionEvent {
    pub fn hash(&self) -> TxHash {
        match self {
            Self::Added { hash, .. } | Self::Replaced { hash, .. } | Self::Removed { hash, .. } => *hash,
        }
    }
}

/// Forwards [`TransactionEvent`]s to anything that can receive one. Kept
/// generic over the sink (an `mpsc::Sender`, a `Vec` under a lock, a test
/// probe) so this module stays free of a hard dependency on a particular
/// channel implementation.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: TransactionEvent);
}

impl EventSink for std::sync::mpsc::Sender<TransactionEvent> {
    fn emit(&self, event: TransactionEvent) {
        // A disconnected receiver means nobody is listening; dropping the
        // event is correct, not an error.
        let _ = self.send(event);
    }
}
