//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! reconciliation core and the outside world. Adapters implement these ports.
//!
//! - `OrderLedger` - Lookup and conditional update of order records
//! - `SecretResolver` - Merchant credential resolution per order
//! - `GatewayTransport` - Outbound HTTP call to the payment gateway

mod gateway_transport;
mod order_ledger;
mod secret_resolver;

pub use gateway_transport::{CheckoutRedirect, GatewayTransport, TransportError};
pub use order_ledger::{LedgerError, OrderLedger, StatusTransition};
pub use secret_resolver::{SecretError, SecretResolver};
