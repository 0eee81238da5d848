//! Inbound notification types.

use serde::Deserialize;

use crate::domain::order::OrderReference;
use crate::domain::wire::FieldMap;

use super::status::{PaymentOutcome, ResponseCode};

/// A notification exactly as posted by the gateway: the transport-encoded
/// data and its seal, delivered as separate form fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawNotification {
    #[serde(rename = "Data")]
    pub data: String,

    #[serde(rename = "Seal")]
    pub seal: String,
}

/// A notification that passed decoding, integrity and status checks.
///
/// Transient: lives for one verification and reconciliation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedNotification {
    /// Classified outcome from the response-code table.
    pub outcome: PaymentOutcome,

    /// The full table entry, kept for decline reasons.
    pub response_code: ResponseCode,

    /// Order the notification refers to.
    pub order_reference: OrderReference,

    /// Amount in minor units as reported by the gateway.
    pub amount: u64,

    /// Gateway transaction reference, when present.
    pub transaction_id: Option<String>,

    /// All decoded fields, for collaborators needing gateway extras.
    pub fields: FieldMap,
}
