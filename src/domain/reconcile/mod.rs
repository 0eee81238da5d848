//! Idempotent reconciliation of verified notifications against orders.
//!
//! # Module Structure
//!
//! - `engine` - Maps a verified notification to an order transition
//! - `outcome` - Closed outcome set every branch resolves to
//! - `dispatch` - Pure mapping from outcomes to redirect and acknowledgment

mod dispatch;
mod engine;
mod outcome;

pub use dispatch::{dispatch, dispatch_rejection, Acknowledgment, DispatchDecision, RedirectTarget};
pub use engine::ReconciliationEngine;
pub use outcome::ReconciliationOutcome;
