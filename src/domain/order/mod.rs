//! Order records referenced from the external ledger.
//!
//! The ledger owns the full order schema; this module carries only the slice
//! the reconciliation engine reads and transitions.

mod status;

pub use status::OrderStatus;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when an order reference fails the wire character rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order reference must be non-empty and free of '|' and '='")]
pub struct InvalidOrderReference;

/// Opaque identifier correlating a local order to a gateway transaction.
///
/// Unique per order. Excludes the wire delimiters `|` and `=` so it
/// round-trips through the encoding without character loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderReference(String);

impl OrderReference {
    pub fn new(reference: impl Into<String>) -> Result<Self, InvalidOrderReference> {
        let reference = reference.into();
        if reference.is_empty() || reference.contains(['|', '=']) {
            return Err(InvalidOrderReference);
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ledger-side order slice the engine reconciles against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Ledger-internal order id.
    pub id: String,

    /// Reference sent to and echoed back by the gateway.
    pub reference: OrderReference,

    /// Recorded amount in minor units.
    pub amount: u64,

    /// ISO-4217 alpha currency code.
    pub currency: String,

    /// Current payment status.
    pub status: OrderStatus,

    /// Gateway transaction id, set exactly once on completion.
    pub transaction_id: Option<String>,

    /// Decline reason, set when the order failed.
    pub failure_reason: Option<String>,

    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order awaiting payment.
    pub fn pending(
        id: impl Into<String>,
        reference: OrderReference,
        amount: u64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            reference,
            amount,
            currency: currency.into(),
            status: OrderStatus::Pending,
            transaction_id: None,
            failure_reason: None,
            updated_at: Utc::now(),
        }
    }
}
