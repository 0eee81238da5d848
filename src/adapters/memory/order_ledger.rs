//! In-memory order ledger.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::order::{Order, OrderReference, OrderStatus};
use crate::ports::{LedgerError, OrderLedger, StatusTransition};

/// Order ledger backed by a map under an async lock.
///
/// The status check and the write happen under one write guard, which makes
/// `transition_status` the same atomic compare-and-set a database row
/// condition would provide.
#[derive(Default)]
pub struct InMemoryOrderLedger {
    orders: RwLock<HashMap<String, Order>>,
    review_flags: RwLock<Vec<(String, String)>>,
}

impl InMemoryOrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an order, replacing any previous record with the same id.
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.id.clone(), order);
    }

    /// Review flags raised so far, as `(order_id, reason)` pairs.
    pub async fn review_flags(&self) -> Vec<(String, String)> {
        self.review_flags.read().await.clone()
    }
}

#[async_trait]
impl OrderLedger for InMemoryOrderLedger {
    async fn find_order(&self, reference: &OrderReference) -> Result<Option<Order>, LedgerError> {
        let orders = self.orders.read().await;
        Ok(orders.values().find(|o| &o.reference == reference).cloned())
    }

    async fn transition_status(
        &self,
        order_id: &str,
        expected: OrderStatus,
        transition: StatusTransition,
    ) -> Result<bool, LedgerError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| LedgerError::Query(format!("unknown order '{order_id}'")))?;

        if order.status != expected {
            return Ok(false);
        }
        match transition {
            StatusTransition::Complete { transaction_id } => {
                order.status = OrderStatus::Completed;
                order.transaction_id = transaction_id;
                order.failure_reason = None;
            }
            StatusTransition::Fail { reason } => {
                order.status = OrderStatus::Failed;
                order.failure_reason = Some(reason);
            }
        }
        order.updated_at = Utc::now();
        Ok(true)
    }

    async fn flag_for_review(&self, order_id: &str, reason: &str) -> Result<(), LedgerError> {
        self.review_flags
            .write()
            .await
            .push((order_id.to_string(), reason.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, reference: &str) -> Order {
        Order::pending(id, OrderReference::new(reference).unwrap(), 5000, "EUR")
    }

    #[tokio::test]
    async fn find_order_resolves_by_reference() {
        let ledger = InMemoryOrderLedger::new();
        ledger.insert(order("o1", "INV-1")).await;

        let found = ledger
            .find_order(&OrderReference::new("INV-1").unwrap())
            .await
            .unwrap();

        assert_eq!(found.unwrap().id, "o1");
    }

    #[tokio::test]
    async fn find_order_returns_none_for_unknown_reference() {
        let ledger = InMemoryOrderLedger::new();

        let found = ledger
            .find_order(&OrderReference::new("INV-404").unwrap())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn transition_applies_only_when_expectation_holds() {
        let ledger = InMemoryOrderLedger::new();
        ledger.insert(order("o1", "INV-1")).await;

        let won = ledger
            .transition_status(
                "o1",
                OrderStatus::Pending,
                StatusTransition::Complete {
                    transaction_id: Some("T1".into()),
                },
            )
            .await
            .unwrap();
        assert!(won);

        // Second attempt expects Pending, which no longer holds.
        let won = ledger
            .transition_status(
                "o1",
                OrderStatus::Pending,
                StatusTransition::Complete {
                    transaction_id: Some("T2".into()),
                },
            )
            .await
            .unwrap();
        assert!(!won);

        let current = ledger
            .find_order(&OrderReference::new("INV-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.transaction_id.as_deref(), Some("T1"));
    }

    #[tokio::test]
    async fn transition_on_unknown_order_is_a_ledger_error() {
        let ledger = InMemoryOrderLedger::new();

        let result = ledger
            .transition_status(
                "missing",
                OrderStatus::Pending,
                StatusTransition::Fail {
                    reason: "05".into(),
                },
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn flag_for_review_records_without_mutating_order() {
        let ledger = InMemoryOrderLedger::new();
        ledger.insert(order("o1", "INV-1")).await;

        ledger.flag_for_review("o1", "amount mismatch").await.unwrap();

        let flags = ledger.review_flags().await;
        assert_eq!(flags, vec![("o1".to_string(), "amount mismatch".to_string())]);
        let current = ledger
            .find_order(&OrderReference::new("INV-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.status, OrderStatus::Pending);
    }
}
