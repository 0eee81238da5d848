//! Order ledger port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::order::{Order, OrderReference, OrderStatus};

/// Errors from the ledger collaborator. All are transient from the core's
/// point of view; the caller acknowledges with a retryable failure.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("ledger query failed: {0}")]
    Query(String),
}

/// A conditional status change with the data recorded alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTransition {
    /// Mark the order paid and record the gateway transaction id.
    Complete { transaction_id: Option<String> },
    /// Mark the order failed and record the decline reason.
    Fail { reason: String },
}

impl StatusTransition {
    pub fn target(&self) -> OrderStatus {
        match self {
            StatusTransition::Complete { .. } => OrderStatus::Completed,
            StatusTransition::Fail { .. } => OrderStatus::Failed,
        }
    }
}

/// Lookup and conditional update of the order ledger.
///
/// The conditional update is the idempotency mechanism: under concurrent
/// delivery of the same notification exactly one caller observes `true`,
/// every other caller observes `false` and must treat that as "someone else
/// already handled this", not as an error.
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Resolves the local order for a gateway order reference.
    async fn find_order(&self, reference: &OrderReference) -> Result<Option<Order>, LedgerError>;

    /// Applies `transition` only if the order currently has `expected`
    /// status. Returns `false` when the expectation no longer held.
    async fn transition_status(
        &self,
        order_id: &str,
        expected: OrderStatus,
        transition: StatusTransition,
    ) -> Result<bool, LedgerError>;

    /// Surfaces a data-integrity concern to operators without mutating the
    /// order.
    async fn flag_for_review(&self, order_id: &str, reason: &str) -> Result<(), LedgerError>;
}
