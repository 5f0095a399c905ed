//! The coordinator (spec §2.5 "PriorityMempool"): owns the two range sets,
//! the hash index, the sender-nonce index, and the current base fee, and
//! implements `add`, `remove`, `manageBlockAdded`, `updateBaseFee`, the
//! merged iterator, and overflow eviction behind a single mutex — mirroring
//! the `Arc<Mutex<LimitOrderPool>>` discipline of the teacher's
//! `order_storage.rs`.

pub mod best;
pub mod dynamic_range;
pub mod events;
pub mod sender_nonce;
pub mod static_range;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Instant,
};

use alloy_primitives::TxHash;
use tracing::{debug, instrument, trace, warn};

use crate::{
    config::PoolConfig,
    error::{AddedStatus, PoolResult, RemovalReason},
    identifier::{SenderIdentifiers, TransactionId},
    metrics::PoolMetrics,
    ordering::{DynamicPriorityKey, StaticPriorityKey},
    traits::{AccountNonceProvider, AnnounceCache, ChainHeadHeaderSupplier, PoolObserver},
    transaction::{is_in_static_range, PoolTransaction, TransactionInfo, TransactionOrigin},
};

pub use best::PrioritizedTransactions;
pub use dynamic_range::DynamicRangeSet;
pub use events::{EventSink, TransactionEvent};
pub use sender_nonce::SenderNonceIndex;
pub use static_range::StaticRangeSet;

struct PoolInner<T: PoolTransaction> {
    hash_index: HashMap<TxHash, TransactionInfo<T>>,
    sender_nonce: SenderNonceIndex<T>,
    static_range: StaticRangeSet<T>,
    dynamic_range: DynamicRangeSet<T>,
    senders: SenderIdentifiers,
    base_fee: Option<u64>,
    next_sequence: u64,
}

/// The priority-ordered, base-fee-aware pending transaction pool.
///
/// Generic over the concrete transaction type so callers can plug in their
/// own encoding; the core only needs [`PoolTransaction`].
pub struct PriorityMempool<T: PoolTransaction> {
    inner: Mutex<PoolInner<T>>,
    config: PoolConfig,
    nonce_provider: Arc<dyn AccountNonceProvider>,
    announce_cache: Arc<dyn AnnounceCache>,
    observers: Mutex<Vec<Arc<dyn PoolObserver<T>>>>,
    event_sink: Mutex<Option<Arc<dyn EventSink>>>,
    metrics: PoolMetrics,
}

impl<T: PoolTransaction> PriorityMempool<T> {
    /// Builds a new, empty pool, seeding the base fee from `chain_head`
    /// (spec §6: "queried once at construction to seed base fee").
    pub fn new(
        config: PoolConfig,
        chain_head: &dyn ChainHeadHeaderSupplier,
        nonce_provider: Arc<dyn AccountNonceProvider>,
        announce_cache: Arc<dyn AnnounceCache>,
    ) -> Self {
        let base_fee = chain_head.base_fee();
        Self {
            inner: Mutex::new(PoolInner {
                hash_index: HashMap::new(),
                sender_nonce: SenderNonceIndex::new(),
                static_range: StaticRangeSet::new(),
                dynamic_range: DynamicRangeSet::new(),
                senders: SenderIdentifiers::new(),
                base_fee,
                next_sequence: 0,
            }),
            config,
            nonce_provider,
            announce_cache,
            observers: Mutex::new(Vec::new()),
            event_sink: Mutex::new(None),
            metrics: PoolMetrics::new(),
        }
    }

    pub fn register_observer(&self, observer: Arc<dyn PoolObserver<T>>) {
        self.observers.lock().expect("lock poisoned").push(observer);
    }

    pub fn set_event_sink(&self, sink: Arc<dyn EventSink>) {
        *self.event_sink.lock().expect("lock poisoned") = Some(sink);
    }

    /// `add(TransactionInfo) -> AddedStatus` (spec §4.2). Admission outcomes
    /// are everyday values, not errors (spec §7), so this returns a status
    /// rather than a `Result`.
    #[instrument(skip(self, transaction), target = "txpool", fields(sender = %transaction.sender(), nonce = transaction.nonce()))]
    pub fn add(&self, transaction: T, origin: TransactionOrigin) -> AddedStatus {
        let hash = transaction.hash();
        let sender = transaction.sender();
        let nonce = transaction.nonce();
        let is_eip1559 = transaction.is_eip1559();
        let local = origin.is_local();

        let added_info;
        let replaced_info: Option<TransactionInfo<T>>;
        let evicted;

        {
            let mut inner = self.inner.lock().expect("lock poisoned");

            if inner.hash_index.contains_key(&hash) {
                trace!(target: "txpool", %hash, "already known");
                return AddedStatus::AlreadyKnown;
            }

            let sender_id = inner.senders.sender_id_or_create(sender);
            let expected_next_nonce = self.nonce_provider.next_nonce(sender);
            let distance = SenderNonceIndex::<T>::distance_from_next_nonce(nonce, expected_next_nonce);

            if distance > self.config.max_future_nonce_distance {
                trace!(target: "txpool", %hash, distance, "nonce too far in future");
                return AddedStatus::NonceTooFarInFuture;
            }

            let mut replaced = None;
            if let Some(incumbent) = inner.sender_nonce.get(sender_id, nonce) {
                let required = bump_required(
                    incumbent.transaction().cap_per_gas(),
                    self.config.price_bump.bump_for(is_eip1559),
                );
                if transaction.cap_per_gas() < required {
                    trace!(target: "txpool", %hash, "replacement below price bump");
                    return AddedStatus::LowerThanReplacementGasPrice;
                }
                let incumbent_hash = incumbent.hash();
                replaced = remove_locked(&mut inner, incumbent_hash);
            }

            let id = TransactionId::new(sender_id, nonce);
            let sequence = inner.next_sequence;
            inner.next_sequence += 1;
            let info =
                TransactionInfo::new(Arc::new(transaction), id, sequence, origin, Instant::now(), distance);

            if is_in_static_range(info.transaction(), inner.base_fee) {
                let key = StaticPriorityKey::new(info.transaction(), distance, sequence, local);
                inner.static_range.insert(key, info.clone());
            } else {
                let key = DynamicPriorityKey::new(info.transaction(), distance, sequence, local);
                inner.dynamic_range.insert(key, info.clone());
            }
            inner.hash_index.insert(hash, info.clone());
            inner.sender_nonce.insert(sender_id, nonce, info.clone());

            let mut dropped = None;
            if inner.hash_index.len() > self.config.max_pending_transactions {
                dropped = evict_overflow_locked(&mut inner);
            }

            added_info = info;
            replaced_info = replaced;
            evicted = dropped;
        }

        self.announce_cache.try_evict_transaction_hash(hash);
        self.metrics.record_added(local);
        self.metrics.record_pool_size(self.size());
        self.metrics.record_static_range_size(self.static_range_len());
        self.metrics.record_dynamic_range_size(self.dynamic_range_len());
        self.notify_added(&added_info);

        if let Some(replaced) = &replaced_info {
            self.metrics.record_removed(replaced.is_local(), RemovalReason::Replaced);
            self.notify_dropped(replaced, RemovalReason::Replaced);
            self.notify_event(TransactionEvent::Replaced {
                hash,
                replaced: replaced.hash(),
                local,
            });
        } else {
            self.notify_event(TransactionEvent::Added { hash, local });
        }

        if let Some((dropped_info, reason)) = evicted {
            self.metrics.record_removed(dropped_info.is_local(), reason);
            self.notify_dropped(&dropped_info, reason);
            self.notify_event(TransactionEvent::Removed {
                hash: dropped_info.hash(),
                local: dropped_info.is_local(),
                reason,
            });
        }

        debug!(target: "txpool", %hash, "added");
        AddedStatus::Added
    }

    /// `remove(Transaction, added_to_block: bool)` (spec §4.3).
    #[instrument(skip(self), target = "txpool")]
    pub fn remove(&self, hash: TxHash, added_to_block: bool) -> Option<TransactionInfo<T>> {
        let removed = {
            let mut inner = self.inner.lock().expect("lock poisoned");
            remove_locked(&mut inner, hash)
        }?;

        let reason = if added_to_block { RemovalReason::AddedToBlock } else { RemovalReason::Invalidated };
        self.metrics.record_removed(removed.is_local(), reason);
        self.metrics.record_pool_size(self.size());
        self.metrics.record_static_range_size(self.static_range_len());
        self.metrics.record_dynamic_range_size(self.dynamic_range_len());
        self.notify_dropped(&removed, reason);
        self.notify_event(TransactionEvent::Removed { hash, local: removed.is_local(), reason });
        debug!(target: "txpool", %hash, ?reason, "removed");
        Some(removed)
    }

    /// `manageBlockAdded(block)` (spec §4.6): only forwards the block's base
    /// fee; removing block-included transactions is the enclosing pool's
    /// responsibility (it calls [`Self::remove`] with `added_to_block = true`
    /// for each).
    #[instrument(skip(self), target = "txpool")]
    pub fn manage_block_added(&self, base_fee: Option<u64>) {
        if let Some(new_base_fee) = base_fee {
            self.update_base_fee(new_base_fee);
        }
    }

    /// `updateBaseFee(new_base_fee)` (spec §4.7).
    #[instrument(skip(self), target = "txpool")]
    pub fn update_base_fee(&self, new_base_fee: u64) {
        let mut inner = self.inner.lock().expect("lock poisoned");

        let prior_base_fee = inner.base_fee;
        if prior_base_fee == Some(new_base_fee) {
            return;
        }

        // Coming from an absent base fee (pre-1559 chain head), everything
        // lived in the dynamic set regardless of declared tip (spec §4.4);
        // neither a pure promotion nor a pure demotion scan is valid here,
        // since both sets may contain members that now belong on the other
        // side. Reclassify both instead of picking a direction.
        let (reclassify_static, reclassify_dynamic) = match prior_base_fee {
            None => (true, true),
            Some(prior) => (new_base_fee > prior, new_base_fee < prior),
        };

        inner.base_fee = Some(new_base_fee);

        if reclassify_static {
            // Base fee rose (or was previously absent): some static members
            // no longer clear the cap.
            let migrants = inner
                .static_range
                .drain_matching(|info| !is_in_static_range(info.transaction(), Some(new_base_fee)));
            for (_, info) in migrants {
                let key = DynamicPriorityKey::new(
                    info.transaction(),
                    info.distance_from_next_nonce(),
                    info.sequence(),
                    info.is_local(),
                );
                inner.dynamic_range.insert(key, info);
            }
        }
        if reclassify_dynamic {
            let migrants = inner
                .dynamic_range
                .drain_matching(|info| is_in_static_range(info.transaction(), Some(new_base_fee)));
            for (_, info) in migrants {
                let key = StaticPriorityKey::new(
                    info.transaction(),
                    info.distance_from_next_nonce(),
                    info.sequence(),
                    info.is_local(),
                );
                inner.static_range.insert(key, info);
            }
        }

        self.metrics.record_static_range_size(inner.static_range.len());
        self.metrics.record_dynamic_range_size(inner.dynamic_range.len());
        debug!(target: "txpool", new_base_fee, ?prior_base_fee, "base fee updated");
    }

    /// `prioritizedTransactions() -> lazy sequence of TransactionInfo`
    /// (spec §4.4). A single-use, snapshot-under-lock iterator.
    pub fn prioritized_transactions(&self) -> PrioritizedTransactions<'_, T> {
        PrioritizedTransactions { pool: self, last_static: None, last_dynamic: None }
    }

    pub fn size(&self) -> usize {
        self.inner.lock().expect("lock poisoned").hash_index.len()
    }

    pub fn contains(&self, hash: TxHash) -> bool {
        self.inner.lock().expect("lock poisoned").hash_index.contains_key(&hash)
    }

    pub fn get(&self, hash: TxHash) -> Option<TransactionInfo<T>> {
        self.inner.lock().expect("lock poisoned").hash_index.get(&hash).cloned()
    }

    pub fn base_fee(&self) -> Option<u64> {
        self.inner.lock().expect("lock poisoned").base_fee
    }

    pub fn static_range_len(&self) -> usize {
        self.inner.lock().expect("lock poisoned").static_range.len()
    }

    pub fn dynamic_range_len(&self) -> usize {
        self.inner.lock().expect("lock poisoned").dynamic_range.len()
    }

    /// Defensive recovery (spec §7): rebuilds both range sets and the
    /// sender-nonce index from the hash index alone. Intended for a caller's
    /// own invariant-checking loop to invoke after observing I1-I5
    /// violated; this core does not run that check on every operation.
    pub fn rebuild_range_sets(&self) -> PoolResult<()> {
        let mut inner = self.inner.lock().expect("lock poisoned");
        warn!(target: "txpool", "rebuilding range sets from hash index");

        let base_fee = inner.base_fee;
        let entries: Vec<TransactionInfo<T>> = inner.hash_index.values().cloned().collect();

        inner.static_range = StaticRangeSet::new();
        inner.dynamic_range = DynamicRangeSet::new();
        inner.sender_nonce = SenderNonceIndex::new();

        for info in entries {
            let id = info.id();
            inner.sender_nonce.insert(id.sender, id.nonce, info.clone());
            if is_in_static_range(info.transaction(), base_fee) {
                let key = StaticPriorityKey::new(
                    info.transaction(),
                    info.distance_from_next_nonce(),
                    info.sequence(),
                    info.is_local(),
                );
                inner.static_range.insert(key, info);
            } else {
                let key = DynamicPriorityKey::new(
                    info.transaction(),
                    info.distance_from_next_nonce(),
                    info.sequence(),
                    info.is_local(),
                );
                inner.dynamic_range.insert(key, info);
            }
        }

        Ok(())
    }

    fn notify_added(&self, info: &TransactionInfo<T>) {
        for observer in self.observers.lock().expect("lock poisoned").iter() {
            observer.on_transaction_added(info);
        }
    }

    fn notify_dropped(&self, info: &TransactionInfo<T>, reason: RemovalReason) {
        for observer in self.observers.lock().expect("lock poisoned").iter() {
            observer.on_transaction_dropped(info, reason);
        }
    }

    fn notify_event(&self, event: TransactionEvent) {
        if let Some(sink) = self.event_sink.lock().expect("lock poisoned").as_ref() {
            sink.emit(event);
        }
    }
}

/// The percent-bumped cap a replacement must clear (spec §4.2 step 2).
fn bump_required(incumbent_cap: u128, bump_percent: u8) -> u128 {
    incumbent_cap.saturating_mul(100 + bump_percent as u128) / 100
}

/// Removes `hash` from every index, trying the dynamic range set first
/// (spec §4.3's "mirrors the observed hot-path distribution" optimization).
fn remove_locked<T: PoolTransaction>(inner: &mut PoolInner<T>, hash: TxHash) -> Option<TransactionInfo<T>> {
    let info = inner.hash_index.remove(&hash)?;
    let id = info.id();
    inner.sender_nonce.remove(id.sender, id.nonce);

    let dynamic_key = DynamicPriorityKey::new(
        info.transaction(),
        info.distance_from_next_nonce(),
        info.sequence(),
        info.is_local(),
    );
    if inner.dynamic_range.remove(&dynamic_key).is_none() {
        let static_key = StaticPriorityKey::new(
            info.transaction(),
            info.distance_from_next_nonce(),
            info.sequence(),
            info.is_local(),
        );
        inner.static_range.remove(&static_key);
    }

    Some(info)
}

/// Overflow eviction (spec §4.5): candidates are the tail of each non-empty
/// range set; the one with the smaller base-fee-aware effective fee goes.
fn evict_overflow_locked<T: PoolTransaction>(
    inner: &mut PoolInner<T>,
) -> Option<(TransactionInfo<T>, RemovalReason)> {
    let base_fee = inner.base_fee.unwrap_or(0);
    let static_tail = inner.static_range.tail().map(|(_, info)| info.clone());
    let dynamic_tail = inner.dynamic_range.tail().map(|(_, info)| info.clone());

    let hash = match (static_tail, dynamic_tail) {
        (None, None) => return None,
        (Some(s), None) => s.hash(),
        (None, Some(d)) => d.hash(),
        (Some(s), Some(d)) => {
            let static_fee = s.transaction().effective_priority_fee_per_gas(base_fee);
            let dynamic_fee = d.transaction().effective_priority_fee_per_gas(base_fee);
            if dynamic_fee < static_fee { d.hash() } else { s.hash() }
        }
    };

    remove_locked(inner, hash).map(|info| (info, RemovalReason::EvictedOverflow))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use alloy_primitives::Address;

    use super::*;
    use crate::test_utils::MockTransaction;

    struct FixedChainHead(Option<u64>);

    impl ChainHeadHeaderSupplier for FixedChainHead {
        fn base_fee(&self) -> Option<u64> {
            self.0
        }
    }

    struct ZeroNonceProvider;

    impl AccountNonceProvider for ZeroNonceProvider {
        fn next_nonce(&self, _sender: Address) -> u64 {
            0
        }
    }

    struct NoopAnnounceCache;

    impl AnnounceCache for NoopAnnounceCache {
        fn try_evict_transaction_hash(&self, _hash: TxHash) {}
    }

    fn pool_at(base_fee: Option<u64>) -> PriorityMempool<MockTransaction> {
        PriorityMempool::new(
            PoolConfig::default(),
            &FixedChainHead(base_fee),
            Arc::new(ZeroNonceProvider),
            Arc::new(NoopAnnounceCache),
        )
    }

    fn sender(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn tx(sender_byte: u8, nonce: u64, tip: u128, max_fee: u128) -> MockTransaction {
        MockTransaction::eip1559()
            .rng_hash()
            .with_sender(sender(sender_byte))
            .with_nonce(nonce)
            .with_priority_fee(tip)
            .with_max_fee(max_fee)
    }

    // S1: both transactions clear their cap at base_fee=100 and land in the
    // static set; the higher tip iterates first.
    #[test]
    fn scenario_s1_static_range_orders_by_declared_tip() {
        let pool = pool_at(Some(100));
        let a = tx(1, 0, 10, 200);
        let b = tx(2, 0, 5, 150);
        let a_hash = a.hash();
        let b_hash = b.hash();

        assert_eq!(pool.add(a, TransactionOrigin::External), AddedStatus::Added);
        assert_eq!(pool.add(b, TransactionOrigin::External), AddedStatus::Added);

        assert_eq!(pool.static_range_len(), 2);
        assert_eq!(pool.dynamic_range_len(), 0);

        let order: Vec<_> = pool.prioritized_transactions().map(|info| info.hash()).collect();
        assert_eq!(order, vec![a_hash, b_hash]);
    }

    // S2: a dynamic candidate with a higher effective fee iterates ahead of
    // a static candidate with a lower one.
    #[test]
    fn scenario_s2_dynamic_with_higher_effective_fee_iterates_first() {
        let pool = pool_at(Some(100));
        let c = tx(1, 0, 50, 120); // effective = min(50, 20) = 20, dynamic
        let a = tx(2, 0, 10, 200); // effective = min(10, 100) = 10, static
        let c_hash = c.hash();
        let a_hash = a.hash();

        pool.add(c, TransactionOrigin::External);
        pool.add(a, TransactionOrigin::External);

        assert_eq!(pool.dynamic_range_len(), 1);
        assert_eq!(pool.static_range_len(), 1);

        let order: Vec<_> = pool.prioritized_transactions().map(|info| info.hash()).collect();
        assert_eq!(order, vec![c_hash, a_hash]);
    }

    // S3/S4: dropping the base fee migrates a dynamic transaction to static
    // once its effective fee reaches its declared tip.
    #[test]
    fn scenario_s3_s4_base_fee_decrease_migrates_dynamic_to_static() {
        let pool = pool_at(Some(100));
        let c = tx(1, 0, 50, 120);
        let a = tx(2, 0, 10, 200);
        let c_hash = c.hash();

        pool.add(c, TransactionOrigin::External);
        pool.add(a, TransactionOrigin::External);

        pool.update_base_fee(80);
        assert_eq!(pool.dynamic_range_len(), 1, "40 < 50 tip, still dynamic");
        assert_eq!(pool.static_range_len(), 1);

        pool.update_base_fee(60);
        assert_eq!(pool.static_range_len(), 2, "effective 50 >= tip 50, now static");
        assert_eq!(pool.dynamic_range_len(), 0);
        assert!(pool.contains(c_hash));
    }

    // S5: overflow eviction removes the candidate with the smallest
    // effective fee across both set tails.
    #[test]
    fn scenario_s5_overflow_evicts_smallest_effective_fee() {
        let mut config = PoolConfig::default();
        config.max_pending_transactions = 2;
        let pool = PriorityMempool::new(
            config,
            &FixedChainHead(Some(100)),
            Arc::new(ZeroNonceProvider),
            Arc::new(NoopAnnounceCache),
        );

        let a = tx(1, 0, 10, 200); // static, effective 10
        let c = tx(2, 0, 50, 120); // dynamic, effective 20
        let d = tx(3, 0, 1, 102); // dynamic, effective 1
        let d_hash = d.hash();

        pool.add(a, TransactionOrigin::External);
        pool.add(c, TransactionOrigin::External);
        pool.add(d, TransactionOrigin::External);

        assert_eq!(pool.size(), 2);
        assert!(!pool.contains(d_hash), "smallest effective fee is evicted");
    }

    // S6: replacement below the price bump is rejected; clearing it swaps
    // the incumbent without changing pool size.
    #[test]
    fn scenario_s6_replacement_requires_price_bump() {
        let pool = pool_at(Some(100));
        let original = tx(1, 0, 100, 300).with_gas_price(100);
        pool.add(original, TransactionOrigin::External);
        assert_eq!(pool.size(), 1);

        let too_low = tx(1, 0, 105, 300);
        assert_eq!(
            pool.add(too_low, TransactionOrigin::External),
            AddedStatus::LowerThanReplacementGasPrice
        );
        assert_eq!(pool.size(), 1);

        let replacement = tx(1, 0, 115, 400);
        let replacement_hash = replacement.hash();
        assert_eq!(pool.add(replacement, TransactionOrigin::External), AddedStatus::Added);
        assert_eq!(pool.size(), 1);
        assert!(pool.contains(replacement_hash));
    }

    #[test]
    fn already_known_hash_is_rejected_idempotently() {
        let pool = pool_at(Some(100));
        let a = tx(1, 0, 10, 200).with_hash(TxHash::repeat_byte(9));
        assert_eq!(pool.add(a.clone(), TransactionOrigin::External), AddedStatus::Added);
        assert_eq!(pool.add(a, TransactionOrigin::External), AddedStatus::AlreadyKnown);
        assert_eq!(pool.size(), 1);
    }

    // P6: add then remove returns the pool to its prior (empty) state.
    #[test]
    fn add_then_remove_restores_prior_state() {
        let pool = pool_at(Some(100));
        let a = tx(1, 0, 10, 200);
        let hash = a.hash();

        pool.add(a, TransactionOrigin::External);
        assert_eq!(pool.size(), 1);

        let removed = pool.remove(hash, false);
        assert!(removed.is_some());
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.static_range_len(), 0);
        assert_eq!(pool.dynamic_range_len(), 0);
        assert!(!pool.contains(hash));
    }

    // P3: the merged iterator never increases in effective priority fee.
    #[test]
    fn merged_iteration_is_monotonically_non_increasing() {
        let pool = pool_at(Some(50));
        let mut expected_hashes = HashMap::new();
        for (i, tip) in [30u128, 5, 80, 12, 1].into_iter().enumerate() {
            let max_fee = tip + 50 + (i as u128) * 7;
            let t = tx(i as u8, 0, tip, max_fee);
            expected_hashes.insert(t.hash(), t.clone());
            pool.add(t, TransactionOrigin::External);
        }

        let base_fee = pool.base_fee().unwrap_or(0);
        let fees: Vec<u128> = pool
            .prioritized_transactions()
            .map(|info| info.transaction().effective_priority_fee_per_gas(base_fee))
            .collect();

        for pair in fees.windows(2) {
            assert!(pair[0] >= pair[1], "{:?} not monotonically non-increasing", fees);
        }
        assert_eq!(fees.len(), expected_hashes.len());
    }

    #[test]
    fn empty_base_fee_puts_everything_in_dynamic_range() {
        let pool = pool_at(None);
        pool.add(tx(1, 0, 10, 200), TransactionOrigin::External);
        pool.add(tx(2, 0, 50, 120), TransactionOrigin::External);

        assert_eq!(pool.static_range_len(), 0);
        assert_eq!(pool.dynamic_range_len(), 2);
    }

    #[test]
    fn local_outranks_remote_in_merged_iteration_on_tied_effective_fee() {
        let pool = pool_at(Some(100));
        let remote = tx(1, 0, 10, 200);
        let local = tx(2, 0, 10, 200);
        let local_hash = local.hash();

        pool.add(remote, TransactionOrigin::External);
        pool.add(local, TransactionOrigin::Local);

        let first = pool.prioritized_transactions().next().unwrap();
        assert_eq!(first.hash(), local_hash);
    }

    // The first base fee update after construction with an absent base fee
    // must reclassify both sets, not just scan the (empty) static side.
    #[test]
    fn first_base_fee_after_absent_promotes_qualifying_dynamic_members() {
        let pool = pool_at(None);
        let a = tx(1, 0, 10, 1000); // effective at base_fee=5 is 10, qualifies as static
        let b = tx(2, 0, 50, 54); // effective at base_fee=5 is 49 < tip 50, stays dynamic
        let a_hash = a.hash();
        let b_hash = b.hash();

        pool.add(a, TransactionOrigin::External);
        pool.add(b, TransactionOrigin::External);
        assert_eq!(pool.static_range_len(), 0);
        assert_eq!(pool.dynamic_range_len(), 2);

        pool.update_base_fee(5);

        assert_eq!(pool.static_range_len(), 1, "a now qualifies for the static set");
        assert_eq!(pool.dynamic_range_len(), 1);

        let order: Vec<_> = pool.prioritized_transactions().map(|info| info.hash()).collect();
        assert_eq!(order, vec![b_hash, a_hash], "49 effective outranks 10 effective");
    }

    // Replacing an incumbent at the same (sender, nonce) must count as a
    // `Replaced` removal, not vanish untracked.
    #[test]
    fn replacement_records_removal_for_displaced_incumbent() {
        use std::sync::{Arc, Mutex};

        struct RecordingObserver(Arc<Mutex<Vec<RemovalReason>>>);
        impl PoolObserver<MockTransaction> for RecordingObserver {
            fn on_transaction_dropped(
                &self,
                _transaction: &TransactionInfo<MockTransaction>,
                reason: RemovalReason,
            ) {
                self.0.lock().unwrap().push(reason);
            }
        }

        let pool = pool_at(Some(100));
        let dropped = Arc::new(Mutex::new(Vec::new()));
        pool.register_observer(Arc::new(RecordingObserver(Arc::clone(&dropped))));

        let original = tx(1, 0, 100, 300);
        pool.add(original, TransactionOrigin::External);

        let replacement = tx(1, 0, 115, 400);
        assert_eq!(pool.add(replacement, TransactionOrigin::External), AddedStatus::Added);

        assert_eq!(dropped.lock().unwrap().as_slice(), [RemovalReason::Replaced]);
    }
}
