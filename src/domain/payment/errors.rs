//! Error types for outbound request building and inbound verification.

use http::StatusCode;
use thiserror::Error;

use crate::domain::wire::EncodeError;

/// Validation failures on the outbound path.
///
/// These are programmer or configuration errors: fatal to the request at
/// hand, not retried blindly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("merchant id is empty")]
    MissingMerchantId,

    #[error("currency code is missing")]
    MissingCurrency,

    #[error("unsupported currency '{0}'")]
    UnsupportedCurrency(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Why an inbound notification was rejected before reconciliation.
///
/// Every rejection is a terminal verifier state, never an exception past
/// the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The payload could not be decoded or a field could not be parsed.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Seal recomputation did not match; the payload cannot be trusted.
    #[error("seal verification failed")]
    BadSignature,

    /// The status code is not in the published table.
    #[error("unknown response code '{0}'")]
    UnknownStatus(String),

    /// No merchant credential could be resolved for the order.
    #[error("merchant secret unavailable: {0}")]
    SecretUnavailable(String),
}

impl RejectReason {
    /// Returns true if redelivery of the same notification may succeed.
    ///
    /// Only credential-store trouble is transient; every other rejection is
    /// a property of the payload itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RejectReason::SecretUnavailable(_))
    }

    /// HTTP status for the acknowledgment to the gateway.
    ///
    /// Failure-equivalent codes make the gateway retry; malformed or
    /// untrusted payloads get a client error so retries stop.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RejectReason::BadSignature => StatusCode::UNAUTHORIZED,
            RejectReason::Malformed(_)
            | RejectReason::MissingField(_)
            | RejectReason::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            RejectReason::SecretUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
