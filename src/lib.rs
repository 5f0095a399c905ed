//! A priority-ordered, base-fee-aware pending transaction pool.
//!
//! Holds the set of transactions received but not yet included in a block
//! and exposes them in the order a block producer should consider them,
//! maximizing priority-fee revenue under the current base fee. Validation,
//! gossip, RPC, persistence, and account-state lookup all live outside this
//! crate; see [`traits`] for the boundaries this pool calls into or is
//! called through.
//!
//! The core data structure is a dual-range index: transactions whose
//! declared tip doesn't bind against the cap live in a base-fee-independent
//! [`pool::StaticRangeSet`], and transactions whose cap binds live in a
//! [`pool::DynamicRangeSet`] ordered by that cap. [`pool::PriorityMempool`]
//! owns both, migrates transactions between them as the base fee moves, and
//! exposes a merged iterator ([`pool::PrioritizedTransactions`]) that
//! produces a single base-fee-aware ranking across both sets.

pub mod config;
pub mod error;
pub mod identifier;
pub mod metrics;
pub mod ordering;
pub mod pool;
pub mod traits;
pub mod transaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::PoolConfig;
pub use error::{AddedStatus, PoolError, PoolResult, RemovalReason};
pub use identifier::{SenderId, TransactionId};
pub use ordering::{DynamicPriorityKey, StaticPriorityKey};
pub use pool::{events::TransactionEvent, PriorityMempool};
pub use transaction::{is_in_static_range, PoolTransaction, TransactionInfo, TransactionOrigin};
