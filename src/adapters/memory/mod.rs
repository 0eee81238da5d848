//! In-memory adapters for tests and local development.

mod order_ledger;
mod secrets;
mod transport;

pub use order_ledger::InMemoryOrderLedger;
pub use secrets::StaticSecretResolver;
pub use transport::StubGatewayTransport;
