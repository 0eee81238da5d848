//! Static merchant secret resolver.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::order::OrderReference;
use crate::ports::{SecretError, SecretResolver};

/// Resolves every order to one configured merchant secret.
///
/// Suitable for single-merchant deployments and tests; multi-merchant hosts
/// implement `SecretResolver` against their credential store.
pub struct StaticSecretResolver {
    secret: SecretString,
}

impl StaticSecretResolver {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }
}

#[async_trait]
impl SecretResolver for StaticSecretResolver {
    async fn secret_for_order(
        &self,
        _reference: &OrderReference,
    ) -> Result<SecretString, SecretError> {
        Ok(self.secret.clone())
    }
}
