//! Adapters - Implementations of the collaborator ports.

pub mod memory;
