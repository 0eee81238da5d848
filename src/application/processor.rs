//! Payment processor capability surface and registry.
//!
//! Hosts interact with a processor through exactly three capabilities:
//! building an outbound request, verifying an inbound notification, and
//! reconciling a verified notification. Processors are constructed once at
//! startup and looked up in an explicit registry keyed by configuration
//! name; there is no implicit global state.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::MerchantConfig;
use crate::domain::payment::{
    NotificationVerifier, PaymentRequest, RawNotification, RequestBuilder, RequestError,
    SignedPayload, VerificationResult, VerifiedNotification,
};
use crate::domain::reconcile::{ReconciliationEngine, ReconciliationOutcome};
use crate::ports::{LedgerError, OrderLedger, SecretResolver};

/// Capability-based processor interface, decoupled from any host framework.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Assembles and signs an outbound payment request.
    fn build_request(&self, request: &PaymentRequest) -> Result<SignedPayload, RequestError>;

    /// Runs the inbound verification state machine.
    async fn verify_notification(&self, raw: &RawNotification) -> VerificationResult;

    /// Applies a verified notification to the order ledger.
    async fn reconcile(
        &self,
        notification: &VerifiedNotification,
    ) -> Result<ReconciliationOutcome, LedgerError>;
}

/// The Worldline SIPS processor: codec, sealer, verifier and engine wired
/// for one merchant configuration.
pub struct SipsProcessor {
    config: MerchantConfig,
    builder: RequestBuilder,
    verifier: NotificationVerifier,
    engine: ReconciliationEngine,
}

impl SipsProcessor {
    pub fn new(
        config: MerchantConfig,
        ledger: Arc<dyn OrderLedger>,
        secrets: Arc<dyn SecretResolver>,
    ) -> Self {
        let builder = RequestBuilder::new(config.key_version, config.interface_version.clone());
        Self {
            builder,
            verifier: NotificationVerifier::new(secrets),
            engine: ReconciliationEngine::new(ledger),
            config,
        }
    }
}

#[async_trait]
impl PaymentProcessor for SipsProcessor {
    fn build_request(&self, request: &PaymentRequest) -> Result<SignedPayload, RequestError> {
        self.builder.build(request, &self.config.secret)
    }

    async fn verify_notification(&self, raw: &RawNotification) -> VerificationResult {
        self.verifier.verify(raw).await
    }

    async fn reconcile(
        &self,
        notification: &VerifiedNotification,
    ) -> Result<ReconciliationOutcome, LedgerError> {
        self.engine.reconcile(notification).await
    }
}

/// Registry of processors keyed by merchant configuration name.
///
/// Built once at process start and passed by reference to request handlers.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn PaymentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, processor: Arc<dyn PaymentProcessor>) {
        self.processors.insert(name.into(), processor);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PaymentProcessor>> {
        self.processors.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}
