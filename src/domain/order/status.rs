//! Order payment status state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment status of a local order.
///
/// `Completed` is terminal: once reached, no notification may change the
/// status or the recorded transaction id. `Failed` may still be promoted to
/// `Completed` by the first genuine success, since gateways can report a
/// late success after an earlier timeout or decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
}

impl OrderStatus {
    /// Returns true if no further transitions are allowed from this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Returns true if the transition is allowed by the state machine.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Completed)
                | (OrderStatus::Pending, OrderStatus::Failed)
                | (OrderStatus::Failed, OrderStatus::Completed)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
