//! Wire format shared with the gateway.
//!
//! Messages travel as an ordered list of `key=value` pairs joined with `|`,
//! transport-encoded as URL-safe base64, and authenticated by a SHA-256 seal
//! computed over the transport-encoded text plus the merchant secret.

mod codec;
mod errors;
mod seal;

pub use codec::{decode, encode, FieldMap};
pub use errors::{DecodeError, EncodeError};
pub use seal::{compute_seal, verify_seal};
