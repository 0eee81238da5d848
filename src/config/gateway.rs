//! Gateway merchant configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Whether the merchant targets the gateway's test or live environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Test,
    Live,
}

/// One merchant's gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantConfig {
    /// Merchant id (PSPID) registered with the gateway.
    pub merchant_id: String,

    /// Seal secret from the merchant portal.
    pub secret: SecretString,

    /// Gateway endpoint the signed payload is posted to.
    pub endpoint_url: String,

    /// Version of the seal secret, sent as `keyVersion`.
    #[serde(default = "default_key_version")]
    pub key_version: u32,

    /// Gateway interface version.
    #[serde(default = "default_interface_version")]
    pub interface_version: String,

    /// Operation mode.
    #[serde(default)]
    pub mode: GatewayMode,
}

fn default_key_version() -> u32 {
    1
}

fn default_interface_version() -> String {
    "HP_2.3".to_string()
}

impl MerchantConfig {
    pub fn is_test_mode(&self) -> bool {
        self.mode == GatewayMode::Test
    }

    /// Validate the merchant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.is_empty() {
            return Err(ValidationError::MissingRequired("gateway.merchant_id"));
        }
        if self.secret.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("gateway.secret"));
        }
        if !self.endpoint_url.starts_with("http://") && !self.endpoint_url.starts_with("https://") {
            return Err(ValidationError::InvalidEndpointUrl);
        }
        if self.mode == GatewayMode::Live && !self.endpoint_url.starts_with("https://") {
            return Err(ValidationError::EndpointMustBeHttps);
        }
        if self.key_version == 0 {
            return Err(ValidationError::InvalidKeyVersion);
        }
        Ok(())
    }
}
