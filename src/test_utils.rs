//! Test fixtures for exercising the pool without a real transaction type.
//!
//! Named and shaped after the fixtures the pack's reth `pool/best.rs` tests
//! import (`MockTransaction`, `MockTransactionFactory`), itself mirrored by
//! the teacher crate's own `#[cfg(any(test, feature = "test-utils"))] pub mod
//! test_utils`.

use std::sync::Arc;

use alloy_primitives::{Address, TxHash};
use rand::Rng;

use crate::{
    identifier::{SenderId, SenderIdentifiers, TransactionId},
    transaction::{PoolTransaction, TransactionInfo, TransactionOrigin},
};

/// A fabricated transaction for tests: every field defaults to something
/// innocuous and is overridden with the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTransaction {
    hash: TxHash,
    sender: Address,
    nonce: u64,
    gas_price: u128,
    max_priority_fee_per_gas: Option<u128>,
    max_fee_per_gas: Option<u128>,
    size: usize,
}

impl MockTransaction {
    /// A legacy (pre-1559) transaction.
    pub fn legacy() -> Self {
        Self {
            hash: TxHash::ZERO,
            sender: Address::ZERO,
            nonce: 0,
            gas_price: 1,
            max_priority_fee_per_gas: None,
            max_fee_per_gas: None,
            size: 128,
        }
    }

    /// An EIP-1559 transaction with a nonzero default tip/cap.
    pub fn eip1559() -> Self {
        Self {
            hash: TxHash::ZERO,
            sender: Address::ZERO,
            nonce: 0,
            gas_price: 0,
            max_priority_fee_per_gas: Some(1),
            max_fee_per_gas: Some(100),
            size: 128,
        }
    }

    pub fn with_hash(mut self, hash: TxHash) -> Self {
        self.hash = hash;
        self
    }

    /// Assigns a random hash, the way the pack's reth pool tests build many
    /// distinct transactions in a loop without tracking hashes by hand.
    pub fn rng_hash(mut self) -> Self {
        self.hash = TxHash::from(rand::thread_rng().gen::<[u8; 32]>());
        self
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = sender;
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_priority_fee(mut self, tip: u128) -> Self {
        self.max_priority_fee_per_gas = Some(tip);
        self
    }

    pub fn with_max_fee(mut self, max_fee: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

impl PoolTransaction for MockTransaction {
    fn hash(&self) -> TxHash {
        self.hash
    }

    fn sender(&self) -> Address {
        self.sender
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_price(&self) -> u128 {
        self.gas_price
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        self.max_priority_fee_per_gas
    }

    fn max_fee_per_gas(&self) -> Option<u128> {
        self.max_fee_per_gas
    }

    fn size(&self) -> usize {
        self.size
    }
}

/// Builds [`TransactionInfo`] wrappers around [`MockTransaction`]s with
/// auto-incrementing sequence numbers and interned senders, the way
/// `MockTransactionFactory` hands out validated transactions in the pack's
/// reth pool tests.
#[derive(Debug, Default)]
pub struct MockTransactionFactory {
    senders: SenderIdentifiers,
    next_sequence: u64,
}

impl MockTransactionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender_id(&mut self, sender: Address) -> SenderId {
        self.senders.sender_id_or_create(sender)
    }

    /// Wraps `transaction` into a [`TransactionInfo`] with a fresh sequence
    /// number and `distance_from_next_nonce` computed against `expected_nonce`.
    pub fn validated(
        &mut self,
        transaction: MockTransaction,
        expected_nonce: u64,
        origin: TransactionOrigin,
    ) -> TransactionInfo<MockTransaction> {
        let sender = self.sender_id(transaction.sender());
        let id = TransactionId::new(sender, transaction.nonce());
        let distance = transaction.nonce().saturating_sub(expected_nonce);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        TransactionInfo::new(
            Arc::new(transaction),
            id,
            sequence,
            origin,
            std::time::Instant::now(),
            distance,
        )
    }
}
