//! Reconciliation engine.
//!
//! Applies a verified notification to the local order it references. The
//! ledger's conditional update carries the idempotency guarantee: under
//! concurrent delivery of the same notification exactly one caller wins the
//! transition, every other one lands in the duplicate branch.

use std::sync::Arc;

use crate::domain::order::{Order, OrderStatus};
use crate::domain::payment::{PaymentOutcome, VerifiedNotification};
use crate::ports::{LedgerError, OrderLedger, StatusTransition};

use super::outcome::ReconciliationOutcome;

pub struct ReconciliationEngine {
    ledger: Arc<dyn OrderLedger>,
}

impl ReconciliationEngine {
    pub fn new(ledger: Arc<dyn OrderLedger>) -> Self {
        Self { ledger }
    }

    /// Reconciles one verified notification.
    ///
    /// # Errors
    ///
    /// Only ledger failures propagate; every business condition resolves to
    /// a `ReconciliationOutcome`.
    pub async fn reconcile(
        &self,
        notification: &VerifiedNotification,
    ) -> Result<ReconciliationOutcome, LedgerError> {
        let Some(order) = self.ledger.find_order(&notification.order_reference).await? else {
            tracing::warn!(
                reference = %notification.order_reference,
                "notification does not match any local order"
            );
            return Ok(ReconciliationOutcome::OrphanNotification {
                order_reference: notification.order_reference.clone(),
            });
        };

        // At most one completion is ever applied.
        if order.status == OrderStatus::Completed {
            tracing::info!(order = %order.id, "order already completed, ignoring redelivery");
            return Ok(ReconciliationOutcome::DuplicateIgnored { order_id: order.id });
        }

        if order.amount != notification.amount {
            tracing::warn!(
                order = %order.id,
                expected = order.amount,
                received = notification.amount,
                "notification amount does not match order, flagging for review"
            );
            let reason = format!(
                "amount mismatch: order records {} but notification carries {}",
                order.amount, notification.amount
            );
            self.ledger.flag_for_review(&order.id, &reason).await?;
            return Ok(ReconciliationOutcome::AmountMismatch {
                order_id: order.id,
                expected: order.amount,
                received: notification.amount,
            });
        }

        match notification.outcome {
            PaymentOutcome::Success => self.apply_success(order, notification).await,
            PaymentOutcome::Pending => {
                Ok(ReconciliationOutcome::AwaitingFinality { order_id: order.id })
            }
            PaymentOutcome::Declined | PaymentOutcome::Error | PaymentOutcome::Duplicate => {
                self.apply_failure(order, notification).await
            }
        }
    }

    /// Pending and Failed may both be promoted: a success arriving after an
    /// earlier decline or timeout is still the first success ever observed.
    async fn apply_success(
        &self,
        order: Order,
        notification: &VerifiedNotification,
    ) -> Result<ReconciliationOutcome, LedgerError> {
        let transition = StatusTransition::Complete {
            transaction_id: notification.transaction_id.clone(),
        };
        if self
            .ledger
            .transition_status(&order.id, order.status, transition.clone())
            .await?
        {
            tracing::info!(
                order = %order.id,
                transaction = ?notification.transaction_id,
                "order completed"
            );
            return Ok(ReconciliationOutcome::Completed {
                order_id: order.id,
                transaction_id: notification.transaction_id.clone(),
            });
        }

        // Lost the conditional update. Re-read to decide from the
        // post-transition state: a concurrent decline leaves the order
        // Failed, which this success may still promote.
        match self.ledger.find_order(&notification.order_reference).await? {
            Some(current) if current.status == OrderStatus::Failed => {
                if self
                    .ledger
                    .transition_status(&order.id, OrderStatus::Failed, transition)
                    .await?
                {
                    tracing::info!(order = %order.id, "late success promoted failed order");
                    return Ok(ReconciliationOutcome::Completed {
                        order_id: order.id,
                        transaction_id: notification.transaction_id.clone(),
                    });
                }
                Ok(ReconciliationOutcome::DuplicateIgnored { order_id: order.id })
            }
            _ => Ok(ReconciliationOutcome::DuplicateIgnored { order_id: order.id }),
        }
    }

    /// A decline only moves Pending to Failed. A completed order is never
    /// downgraded and an already-failed order stays as recorded.
    async fn apply_failure(
        &self,
        order: Order,
        notification: &VerifiedNotification,
    ) -> Result<ReconciliationOutcome, LedgerError> {
        if order.status != OrderStatus::Pending {
            return Ok(ReconciliationOutcome::DuplicateIgnored { order_id: order.id });
        }

        let reason = format!(
            "{}: {}",
            notification.response_code.code, notification.response_code.message
        );
        if self
            .ledger
            .transition_status(
                &order.id,
                OrderStatus::Pending,
                StatusTransition::Fail {
                    reason: reason.clone(),
                },
            )
            .await?
        {
            tracing::info!(order = %order.id, %reason, "order failed");
            return Ok(ReconciliationOutcome::Failed {
                order_id: order.id,
                reason,
            });
        }
        // Someone else moved the order first.
        Ok(ReconciliationOutcome::DuplicateIgnored { order_id: order.id })
    }
}
