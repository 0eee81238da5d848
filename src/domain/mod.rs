//! Domain layer containing the gateway message pipeline.
//!
//! # Module Organization
//!
//! - `wire` - Pipe-delimited `key=value` codec and the SHA-256 seal
//! - `payment` - Outbound request building and inbound notification verification
//! - `order` - Order records referenced from the external ledger
//! - `reconcile` - Idempotent application of verified notifications to orders

pub mod order;
pub mod payment;
pub mod reconcile;
pub mod wire;
