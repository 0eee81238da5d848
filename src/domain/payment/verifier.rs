//! Inbound notification verification.
//!
//! A total two-state machine: every input, however malformed or adversarial,
//! reaches `Verified` or `Rejected`. Nothing throws past the caller and no
//! side effects are applied here.

use std::sync::Arc;

use crate::domain::order::OrderReference;
use crate::domain::wire;
use crate::ports::SecretResolver;

use super::errors::RejectReason;
use super::fields;
use super::notification::{RawNotification, VerifiedNotification};
use super::status;

/// Terminal state of the verification state machine.
#[derive(Debug, Clone)]
pub enum VerificationResult {
    Verified(VerifiedNotification),
    Rejected(RejectReason),
}

/// Verifies raw gateway notifications.
///
/// The merchant secret is resolved per order reference through the
/// `SecretResolver` port, since different orders may belong to different
/// merchant configurations.
pub struct NotificationVerifier {
    secrets: Arc<dyn SecretResolver>,
}

impl NotificationVerifier {
    pub fn new(secrets: Arc<dyn SecretResolver>) -> Self {
        Self { secrets }
    }

    /// Runs the verification steps, each a possible rejection point:
    ///
    /// 1. decode the transport-encoded data
    /// 2. require status code, order reference and integer amount
    /// 3. recompute the seal with the merchant secret
    /// 4. map the status code through the published table
    pub async fn verify(&self, raw: &RawNotification) -> VerificationResult {
        let fields = match wire::decode(&raw.data) {
            Ok(fields) => fields,
            Err(e) => return VerificationResult::Rejected(RejectReason::Malformed(e.to_string())),
        };

        let Some(code) = fields.get(fields::RESPONSE_CODE) else {
            return VerificationResult::Rejected(RejectReason::MissingField(fields::RESPONSE_CODE));
        };
        let Some(order_id) = fields.get(fields::ORDER_ID) else {
            return VerificationResult::Rejected(RejectReason::MissingField(fields::ORDER_ID));
        };
        let Some(amount_raw) = fields.get(fields::AMOUNT) else {
            return VerificationResult::Rejected(RejectReason::MissingField(fields::AMOUNT));
        };
        let amount: u64 = match amount_raw.parse() {
            Ok(amount) => amount,
            Err(_) => {
                return VerificationResult::Rejected(RejectReason::Malformed(format!(
                    "amount '{amount_raw}' is not an integer"
                )));
            }
        };
        let order_reference = match OrderReference::new(order_id) {
            Ok(reference) => reference,
            Err(e) => return VerificationResult::Rejected(RejectReason::Malformed(e.to_string())),
        };

        let secret = match self.secrets.secret_for_order(&order_reference).await {
            Ok(secret) => secret,
            Err(e) => {
                return VerificationResult::Rejected(RejectReason::SecretUnavailable(e.to_string()));
            }
        };
        if !wire::verify_seal(&raw.data, &secret, &raw.seal) {
            tracing::warn!(order = %order_reference, "notification seal verification failed");
            return VerificationResult::Rejected(RejectReason::BadSignature);
        }

        let Some(response_code) = status::lookup(code) else {
            return VerificationResult::Rejected(RejectReason::UnknownStatus(code.to_string()));
        };

        let transaction_id = fields
            .get(fields::TRANSACTION_REFERENCE)
            .map(str::to_string);
        VerificationResult::Verified(VerifiedNotification {
            outcome: response_code.outcome,
            response_code,
            order_reference,
            amount,
            transaction_id,
            fields,
        })
    }
}
