//! Published gateway response-code table.
//!
//! The gateway reports outcomes as two-digit string codes from a finite
//! published set. The table is static configuration data, not business
//! logic; an unknown code is rejected before reconciliation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Closed classification of gateway response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Authorization accepted.
    Success,
    /// Refused by the issuer, the merchant contract, or the payer.
    Declined,
    /// The gateway has not reached a final state yet.
    Pending,
    /// Technical failure on the gateway or acquirer side.
    Error,
    /// Transaction reference already reserved on the gateway.
    Duplicate,
}

impl PaymentOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, PaymentOutcome::Success)
    }

    /// Returns true once the gateway will not change its answer anymore.
    pub fn is_final(self) -> bool {
        !matches!(self, PaymentOutcome::Pending)
    }
}

/// One entry of the published response-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCode {
    pub code: &'static str,
    pub message: &'static str,
    pub outcome: PaymentOutcome,
}

const fn entry(code: &'static str, outcome: PaymentOutcome, message: &'static str) -> ResponseCode {
    ResponseCode {
        code,
        message,
        outcome,
    }
}

/// Response codes published by the gateway, version HP_2.3.
const TABLE: &[ResponseCode] = &[
    entry("00", PaymentOutcome::Success, "Transaction success, authorization accepted"),
    entry("02", PaymentOutcome::Declined, "Authorization limit on the card exceeded, contact the bank"),
    entry("03", PaymentOutcome::Declined, "Invalid merchant contract"),
    entry("05", PaymentOutcome::Declined, "Do not honor, authorization refused"),
    entry("12", PaymentOutcome::Declined, "Invalid transaction, check the parameters sent in the request"),
    entry("14", PaymentOutcome::Declined, "Invalid card number or invalid card security code"),
    entry("17", PaymentOutcome::Declined, "Cancellation of payment by the end user"),
    entry("24", PaymentOutcome::Declined, "Invalid status"),
    entry("25", PaymentOutcome::Error, "Transaction not found in database"),
    entry("30", PaymentOutcome::Declined, "Invalid format"),
    entry("34", PaymentOutcome::Declined, "Fraud suspicion"),
    entry("40", PaymentOutcome::Declined, "Operation not allowed to this merchant"),
    entry("60", PaymentOutcome::Pending, "Pending transaction"),
    entry("63", PaymentOutcome::Declined, "Security breach detected, transaction stopped"),
    entry("75", PaymentOutcome::Declined, "Number of attempts to enter the card number exceeded"),
    entry("90", PaymentOutcome::Error, "Acquirer server temporarily unavailable"),
    entry("94", PaymentOutcome::Duplicate, "Duplicate transaction, reference already reserved"),
    entry("97", PaymentOutcome::Error, "Request time-out, transaction refused"),
    entry("99", PaymentOutcome::Error, "Payment page temporarily unavailable"),
];

static BY_CODE: Lazy<HashMap<&'static str, ResponseCode>> =
    Lazy::new(|| TABLE.iter().map(|rc| (rc.code, *rc)).collect());

/// Looks up a response code in the published table.
pub fn lookup(code: &str) -> Option<ResponseCode> {
    BY_CODE.get(code).copied()
}
