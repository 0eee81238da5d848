//! Outbound payment request and signed payload types.

use serde::{Deserialize, Serialize};

use crate::domain::order::OrderReference;

/// A new payment request, built once per checkout attempt.
///
/// Amounts are integer minor units. The request is immutable after signing;
/// any field explicitly requiring a timestamp must be passed in by the
/// caller through `extra_fields` to keep building deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub merchant_id: String,
    pub order_reference: OrderReference,
    /// Amount in minor units.
    pub amount: u64,
    /// ISO-4217 alpha currency code.
    pub currency: String,
    /// Where the payer's browser returns after checkout.
    pub return_url: String,
    /// Where the gateway posts the asynchronous notification.
    pub notify_url: String,
    pub customer_id: String,
    /// Additional gateway fields, appended after the canonical ones in the
    /// order supplied.
    pub extra_fields: Vec<(String, String)>,
}

/// The signed message posted to the gateway. Immutable once produced.
///
/// The seal covers `data` only, never the unencoded field map and never
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedPayload {
    /// Transport-encoded field data.
    #[serde(rename = "Data")]
    pub data: String,

    /// Hex SHA-256 seal over `data` plus the merchant secret.
    #[serde(rename = "Seal")]
    pub seal: String,

    /// Transport encoding tag.
    #[serde(rename = "Encode")]
    pub encoding: String,

    /// Gateway interface version, e.g. `HP_2.3`.
    #[serde(rename = "InterfaceVersion")]
    pub interface_version: String,
}
