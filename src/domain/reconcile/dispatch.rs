//! Response dispatcher.
//!
//! Pure mapping from a reconciliation outcome (or a verification rejection)
//! to the user-facing redirect target and the acknowledgment returned to the
//! gateway. Executing the actual HTTP redirect is the host's concern.

use http::StatusCode;

use crate::domain::payment::RejectReason;

use super::outcome::ReconciliationOutcome;

/// Where to send the paying party next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    ThankYou,
    Cancellation,
}

/// Acknowledgment payload for the gateway.
///
/// Success-equivalent statuses stop redelivery; failure-equivalent ones
/// invite a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub status: StatusCode,
    pub body: String,
}

/// The dispatcher's two outputs, produced without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchDecision {
    pub redirect: RedirectTarget,
    pub ack: Acknowledgment,
}

/// Maps a reconciliation outcome to redirect and acknowledgment.
///
/// Every processed notification acknowledges success, duplicates and
/// orphans included; the cancellation page is the safe default for every
/// outcome that is not a completed payment.
pub fn dispatch(outcome: &ReconciliationOutcome) -> DispatchDecision {
    let (redirect, body) = match outcome {
        ReconciliationOutcome::Completed { order_id, .. } => (
            RedirectTarget::ThankYou,
            format!("order {order_id} completed"),
        ),
        ReconciliationOutcome::DuplicateIgnored { order_id } => (
            RedirectTarget::ThankYou,
            format!("order {order_id} already handled"),
        ),
        ReconciliationOutcome::Failed { order_id, reason } => (
            RedirectTarget::Cancellation,
            format!("order {order_id} failed: {reason}"),
        ),
        ReconciliationOutcome::OrphanNotification { order_reference } => (
            RedirectTarget::Cancellation,
            format!("no order matches reference {order_reference}"),
        ),
        ReconciliationOutcome::AmountMismatch { order_id, .. } => (
            RedirectTarget::Cancellation,
            format!("order {order_id} flagged for review"),
        ),
        ReconciliationOutcome::AwaitingFinality { order_id } => (
            RedirectTarget::Cancellation,
            format!("order {order_id} awaiting final status"),
        ),
    };
    DispatchDecision {
        redirect,
        ack: Acknowledgment {
            status: StatusCode::OK,
            body,
        },
    }
}

/// Maps a verification rejection to the safe default redirect and a
/// failure-equivalent acknowledgment so the gateway may retry what can
/// still succeed.
pub fn dispatch_rejection(reason: &RejectReason) -> DispatchDecision {
    DispatchDecision {
        redirect: RedirectTarget::Cancellation,
        ack: Acknowledgment {
            status: reason.status_code(),
            body: reason.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderReference;

    #[test]
    fn completed_redirects_to_thank_you_with_ok() {
        let decision = dispatch(&ReconciliationOutcome::Completed {
            order_id: "o1".into(),
            transaction_id: Some("T1".into()),
        });

        assert_eq!(decision.redirect, RedirectTarget::ThankYou);
        assert_eq!(decision.ack.status, StatusCode::OK);
    }

    #[test]
    fn duplicate_acknowledges_success_on_thank_you_page() {
        let decision = dispatch(&ReconciliationOutcome::DuplicateIgnored {
            order_id: "o1".into(),
        });

        assert_eq!(decision.redirect, RedirectTarget::ThankYou);
        assert_eq!(decision.ack.status, StatusCode::OK);
    }

    #[test]
    fn non_success_outcomes_redirect_to_cancellation_but_acknowledge() {
        let outcomes = [
            ReconciliationOutcome::Failed {
                order_id: "o1".into(),
                reason: "05: refused".into(),
            },
            ReconciliationOutcome::OrphanNotification {
                order_reference: OrderReference::new("INV-404").unwrap(),
            },
            ReconciliationOutcome::AmountMismatch {
                order_id: "o1".into(),
                expected: 5000,
                received: 4999,
            },
            ReconciliationOutcome::AwaitingFinality {
                order_id: "o1".into(),
            },
        ];

        for outcome in &outcomes {
            let decision = dispatch(outcome);
            assert_eq!(decision.redirect, RedirectTarget::Cancellation);
            assert_eq!(decision.ack.status, StatusCode::OK);
        }
    }

    #[test]
    fn rejected_signature_is_a_failure_acknowledgment() {
        let decision = dispatch_rejection(&RejectReason::BadSignature);

        assert_eq!(decision.redirect, RedirectTarget::Cancellation);
        assert_eq!(decision.ack.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn malformed_payload_is_a_client_error() {
        let decision = dispatch_rejection(&RejectReason::Malformed("bad base64".into()));

        assert_eq!(decision.ack.status, StatusCode::BAD_REQUEST);
        assert!(decision.ack.body.contains("bad base64"));
    }
}
