//! Pool configuration (spec §6's closed configuration set).

use std::time::Duration;

/// Percent bump a replacement transaction at the same (sender, nonce) must
/// clear over the incumbent, expressed as a whole-number percentage
/// (0-100). Split legacy/1559 the way reth's `PriceBumpConfig` does, even
/// though spec §6 only names a single `price_bump` — callers that only ever
/// see one transaction kind get identical behavior from either field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBumpConfig {
    /// Bump required for legacy transactions.
    pub default_price_bump: u8,
    /// Bump required for EIP-1559 transactions.
    pub eip1559_price_bump: u8,
}

/// Default price bump percentage, matching the common `10%` convention used
/// by mainnet clients for transaction replacement.
pub const DEFAULT_PRICE_BUMP: u8 = 10;

impl Default for PriceBumpConfig {
    fn default() -> Self {
        Self { default_price_bump: DEFAULT_PRICE_BUMP, eip1559_price_bump: DEFAULT_PRICE_BUMP }
    }
}

impl PriceBumpConfig {
    /// The bump percentage to apply to a given (old, new) replacement pair.
    /// Both pool variants currently track the same transaction kind, so this
    /// resolves the same way regardless of which field callers use; the
    /// split exists so a caller that distinguishes legacy vs 1559 has
    /// somewhere to put that distinction.
    pub fn bump_for(&self, is_eip1559: bool) -> u8 {
        if is_eip1559 { self.eip1559_price_bump } else { self.default_price_bump }
    }
}

/// Pool-wide size and behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Hard cap on the number of transactions held in the hash index.
    /// Triggers overflow eviction (spec §4.5) once exceeded.
    pub max_pending_transactions: usize,
    /// Size of the announce-hash cache the parent pool maintains; the core
    /// only forwards `tryEvictTransactionHash` calls, it does not size the
    /// cache itself, but this is threaded through so a single config value
    /// configures both layers.
    pub max_pooled_transaction_hashes: usize,
    /// Replacement bump requirement.
    pub price_bump: PriceBumpConfig,
    /// How long a pending transaction may sit before the enclosing pool
    /// expires it. Not enforced by this core (spec §1 Out of scope), carried
    /// here only so a single config value can be handed to both layers.
    pub max_transaction_retention: Duration,
    /// Furthest a transaction's nonce may sit beyond the sender's next
    /// expected nonce and still be admitted; exceeding it returns
    /// `NonceTooFarInFuture`. The algorithm that rule belongs to ("the
    /// sender-nonce tracker") lives outside this core, which does not own
    /// per-sender account state; this bound is the local policy this core
    /// applies so that status is actually reachable rather than dead code.
    pub max_future_nonce_distance: u64,
}

/// Default cap on the number of transactions held in a single sub-pool,
/// matching the order of magnitude reth's `TXPOOL_SUBPOOL_MAX_TXS_DEFAULT`
/// uses for a sub-pool limit.
pub const TXPOOL_SUBPOOL_MAX_TXS_DEFAULT: usize = 10_000;

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pending_transactions: TXPOOL_SUBPOOL_MAX_TXS_DEFAULT,
            max_pooled_transaction_hashes: 32_768,
            price_bump: PriceBumpConfig::default(),
            max_transaction_retention: Duration::from_secs(3 * 60 * 60),
            max_future_nonce_distance: 64,
        }
    }
}

impl PoolConfig {
    /// Builder-style override of the pending-transaction cap.
    pub fn with_max_pending_transactions(mut self, max: usize) -> Self {
        self.max_pending_transactions = max;
        self
    }

    /// Builder-style override of the replacement price bump.
    pub fn with_price_bump(mut self, bump: PriceBumpConfig) -> Self {
        self.price_bump = bump;
        self
    }
}
