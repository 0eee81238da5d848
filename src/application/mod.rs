//! Application layer wiring the domain pipeline to the collaborator ports.

mod handle_notification;
mod processor;

pub use handle_notification::{
    HandleNotificationCommand, HandleNotificationHandler, HandleNotificationResult,
};
pub use processor::{PaymentProcessor, ProcessorRegistry, SipsProcessor};
