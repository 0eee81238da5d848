//! Stub gateway transport.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::payment::SignedPayload;
use crate::ports::{CheckoutRedirect, GatewayTransport, TransportError};

/// Transport returning a fixed redirect, or a timeout when configured to.
///
/// Records the payloads it was asked to send so tests can assert on them.
pub struct StubGatewayTransport {
    redirect_url: String,
    time_out: bool,
    sent: Mutex<Vec<SignedPayload>>,
}

impl StubGatewayTransport {
    pub fn new(redirect_url: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
            time_out: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A transport whose every call times out.
    pub fn timing_out() -> Self {
        Self {
            redirect_url: String::new(),
            time_out: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub async fn sent_payloads(&self) -> Vec<SignedPayload> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl GatewayTransport for StubGatewayTransport {
    async fn create_checkout(
        &self,
        payload: &SignedPayload,
    ) -> Result<CheckoutRedirect, TransportError> {
        if self.time_out {
            return Err(TransportError::Timeout(Duration::from_secs(10)));
        }
        self.sent.lock().await.push(payload.clone());
        Ok(CheckoutRedirect {
            url: self.redirect_url.clone(),
        })
    }
}
