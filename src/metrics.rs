//! Pool metrics (spec §6 "MetricsSystem"), wired through the `metrics` facade
//! the teacher's workspace depends on (`metrics = "0.21.1"`).

use crate::error::RemovalReason;

/// Records the closed counter set spec §6 names, split by `(local, reason)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoolMetrics;

impl PoolMetrics {
    pub fn new() -> Self {
        Self
    }

    pub fn record_added(&self, local: bool) {
        metrics::counter!("txpool_transactions_added_total", "origin" => origin_label(local))
            .increment(1);
    }

    pub fn record_removed(&self, local: bool, reason: RemovalReason) {
        metrics::counter!(
            "txpool_transactions_removed_total",
            "origin" => origin_label(local),
            "reason" => reason.as_metric_label()
        )
        .increment(1);
    }

    pub fn record_pool_size(&self, size: usize) {
        metrics::gauge!("txpool_size").set(size as f64);
    }

    pub fn record_static_range_size(&self, size: usize) {
        metrics::gauge!("txpool_static_range_size").set(size as f64);
    }

    pub fn record_dynamic_range_size(&self, size: usize) {
        metrics::gauge!("txpool_dynamic_range_size").set(size as f64);
    }
}

fn origin_label(local: bool) -> &'static str {
    if local {
        "local"
    } else {
        "remote"
    }
}
