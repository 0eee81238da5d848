//! Reconciliation outcome set.

use crate::domain::order::OrderReference;

/// Result of applying one verified notification to the order ledger.
///
/// Every engine branch resolves to one of these; none are silently
/// swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// The first successful completion was applied to the order.
    Completed {
        order_id: String,
        transaction_id: Option<String>,
    },

    /// The order was already handled; nothing changed. Acknowledged as
    /// success so the gateway stops retrying.
    DuplicateIgnored { order_id: String },

    /// The payment was declined or errored and the order was marked failed.
    Failed { order_id: String, reason: String },

    /// No local order matches the notification's order reference. Logged,
    /// not applied; gateways retry and may send stale references.
    OrphanNotification { order_reference: OrderReference },

    /// Notification amount differs from the recorded amount. The order is
    /// left untouched and flagged for manual review.
    AmountMismatch {
        order_id: String,
        expected: u64,
        received: u64,
    },

    /// The gateway has not reached finality; no state change.
    AwaitingFinality { order_id: String },
}
