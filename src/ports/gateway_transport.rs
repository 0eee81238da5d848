//! Outbound gateway transport port.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::SignedPayload;

/// Redirect target for the hosted-checkout flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// URL the paying party is sent to.
    pub url: String,
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The gateway did not answer within the bounded timeout.
    ///
    /// A timeout never means "payment did not happen": the reconciliation
    /// engine stays the source of truth and must accept a late notification
    /// for this order.
    #[error("gateway request timed out after {0:?}")]
    Timeout(Duration),

    #[error("gateway returned unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("transport failure: {0}")]
    Io(String),
}

impl TransportError {
    /// Returns true if the outbound call may be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Timeout(_) | TransportError::Io(_) => true,
            TransportError::UnexpectedStatus(status) => *status >= 500,
        }
    }
}

/// Performs the outbound HTTP call with the signed payload.
///
/// Implementations must bound the call with a timeout and surface it as
/// `TransportError::Timeout`, never as an implicit success.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Posts the signed payload and returns the hosted-checkout redirect.
    async fn create_checkout(
        &self,
        payload: &SignedPayload,
    ) -> Result<CheckoutRedirect, TransportError>;
}
