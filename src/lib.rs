//! Worldline SIPS payment gateway integration.
//!
//! This crate builds authenticated outbound hosted-checkout requests and
//! verifies and applies inbound asynchronous payment notifications (IPNs)
//! against a local order ledger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
