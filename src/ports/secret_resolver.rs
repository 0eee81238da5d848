//! Merchant secret resolution port.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::domain::order::OrderReference;

#[derive(Debug, Clone, Error)]
pub enum SecretError {
    /// No merchant credential applies to this order.
    #[error("no merchant credential for order '{0}'")]
    UnknownMerchant(String),

    /// The credential store could not be reached.
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// Resolves which merchant credential applies to an order.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    async fn secret_for_order(
        &self,
        reference: &OrderReference,
    ) -> Result<SecretString, SecretError>;
}
