//! HandleNotificationHandler - Command handler for inbound gateway
//! notifications.
//!
//! Runs one full verification and reconciliation cycle and resolves every
//! input, adversarial ones included, to a redirect plus acknowledgment. No
//! error escapes to the host uncaught.

use std::sync::Arc;

use http::StatusCode;

use crate::domain::payment::RawNotification;
use crate::domain::reconcile::{
    dispatch, dispatch_rejection, Acknowledgment, RedirectTarget, ReconciliationOutcome,
};

use super::processor::PaymentProcessor;

/// Command carrying the gateway's raw POST fields.
#[derive(Debug, Clone)]
pub struct HandleNotificationCommand {
    /// Transport-encoded `Data` field.
    pub data: String,
    /// `Seal` field.
    pub seal: String,
}

/// Result of notification processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleNotificationResult {
    /// Where the paying party's browser goes next.
    pub redirect: RedirectTarget,
    /// Response returned to the gateway.
    pub ack: Acknowledgment,
    /// The reconciliation outcome, absent when verification rejected the
    /// payload or the ledger failed.
    pub outcome: Option<ReconciliationOutcome>,
}

/// Handler for processing gateway payment notifications.
pub struct HandleNotificationHandler {
    processor: Arc<dyn PaymentProcessor>,
}

impl HandleNotificationHandler {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    pub async fn handle(&self, cmd: HandleNotificationCommand) -> HandleNotificationResult {
        let raw = RawNotification {
            data: cmd.data,
            seal: cmd.seal,
        };

        // 1. Verify integrity and classify the status code.
        let notification = match self.processor.verify_notification(&raw).await {
            crate::domain::payment::VerificationResult::Verified(notification) => notification,
            crate::domain::payment::VerificationResult::Rejected(reason) => {
                tracing::warn!(%reason, retryable = reason.is_retryable(), "notification rejected");
                let decision = dispatch_rejection(&reason);
                return HandleNotificationResult {
                    redirect: decision.redirect,
                    ack: decision.ack,
                    outcome: None,
                };
            }
        };

        // 2. Reconcile against the order ledger.
        match self.processor.reconcile(&notification).await {
            Ok(outcome) => {
                tracing::info!(order = %notification.order_reference, ?outcome, "notification reconciled");
                let decision = dispatch(&outcome);
                HandleNotificationResult {
                    redirect: decision.redirect,
                    ack: decision.ack,
                    outcome: Some(outcome),
                }
            }
            Err(e) => {
                // Ledger trouble is transient: answer failure-equivalent so
                // the gateway redelivers.
                tracing::error!(order = %notification.order_reference, error = %e, "ledger failure during reconciliation");
                HandleNotificationResult {
                    redirect: RedirectTarget::Cancellation,
                    ack: Acknowledgment {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: "ledger unavailable, please retry".to_string(),
                    },
                    outcome: None,
                }
            }
        }
    }
}
