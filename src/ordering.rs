//! The composite comparator keys for `StaticRangeSet` and `DynamicRangeSet`
//! (spec §4.1).
//!
//! Both keys are derived tuple structs: `#[derive(Ord)]` compares fields in
//! declaration order, so the declaration order *is* the lexicographic
//! tie-break chain spec §4.1 specifies. Fields that should rank "smaller is
//! better" are wrapped in [`std::cmp::Reverse`] so that, uniformly across
//! both keys, a *greater* key is a *better* candidate — mirroring the
//! `Reverse<OrderPriorityData>` idiom the teacher's `limit/pending.rs` uses
//! for its descending-price bid side.

use std::cmp::Reverse;

use crate::transaction::PoolTransaction;

/// Comparator key for `StaticRangeSet`: highest first on `local`, then
/// `max_priority_fee_per_gas`, then closeness to the next executable nonce,
/// then arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StaticPriorityKey {
    local: bool,
    max_priority_fee_per_gas: u128,
    distance_from_next_nonce: Reverse<u64>,
    sequence: Reverse<u64>,
}

impl StaticPriorityKey {
    pub fn new<T: PoolTransaction>(
        transaction: &T,
        distance_from_next_nonce: u64,
        sequence: u64,
        local: bool,
    ) -> Self {
        Self {
            local,
            // guaranteed present for static-range members; absent is a
            // caller error, treated as the worst possible tip so a
            // misclassified transaction sorts to the tail rather than
            // panicking.
            max_priority_fee_per_gas: transaction.max_priority_fee_per_gas().unwrap_or(0),
            distance_from_next_nonce: Reverse(distance_from_next_nonce),
            sequence: Reverse(sequence),
        }
    }
}

/// Comparator key for `DynamicRangeSet`: identical shape to
/// [`StaticPriorityKey`], but keyed on the declared cap
/// (`max_fee_per_gas`/`gas_price`) rather than the effective fee. The base
/// fee is deliberately absent from this key (spec §4.1): it would otherwise
/// have to be threaded through every comparison, and the set's internal
/// order would shift under every base-fee update rather than staying stable
/// between the base-fee-aware merges in `pool::best`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DynamicPriorityKey {
    local: bool,
    cap_per_gas: u128,
    distance_from_next_nonce: Reverse<u64>,
    sequence: Reverse<u64>,
}

impl DynamicPriorityKey {
    pub fn new<T: PoolTransaction>(
        transaction: &T,
        distance_from_next_nonce: u64,
        sequence: u64,
        local: bool,
    ) -> Self {
        Self {
            local,
            cap_per_gas: transaction.cap_per_gas(),
            distance_from_next_nonce: Reverse(distance_from_next_nonce),
            sequence: Reverse(sequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTransaction;

    #[test]
    fn local_outranks_remote_regardless_of_fee() {
        let local = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(1), 0, 5, true);
        let remote =
            StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(1000), 0, 0, false);
        assert!(local > remote);
    }

    #[test]
    fn higher_fee_outranks_lower_fee_when_local_equal() {
        let hi = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(10), 0, 0, false);
        let lo = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(5), 0, 0, false);
        assert!(hi > lo);
    }

    #[test]
    fn smaller_distance_outranks_larger_distance() {
        let near = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(5), 0, 0, false);
        let far = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(5), 3, 0, false);
        assert!(near > far);
    }

    #[test]
    fn earlier_sequence_outranks_later_sequence_on_full_tie() {
        let earlier =
            StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(5), 0, 1, false);
        let later = StaticPriorityKey::new(&MockTransaction::eip1559().with_priority_fee(5), 0, 2, false);
        assert!(earlier > later);
    }
}
