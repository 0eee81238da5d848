//! Payment message building and verification.
//!
//! # Module Structure
//!
//! - `request` - Outbound payment request and signed payload types
//! - `builder` - Canonical field ordering, encoding and sealing
//! - `notification` - Inbound notification types
//! - `verifier` - Total verification state machine for inbound messages
//! - `status` - Published gateway response-code table
//! - `currency` - ISO-4217 numeric codes used on the wire
//! - `fields` - Wire field names shared by both directions

mod builder;
mod currency;
mod errors;
pub mod fields;
mod notification;
mod request;
mod status;
mod verifier;

pub use builder::RequestBuilder;
pub use currency::numeric_code;
pub use errors::{RejectReason, RequestError};
pub use notification::{RawNotification, VerifiedNotification};
pub use request::{PaymentRequest, SignedPayload};
pub use status::{lookup, PaymentOutcome, ResponseCode};
pub use verifier::{NotificationVerifier, VerificationResult};
