//! Implementations of ports (hexagonal adapters).

pub mod capitoltrades;
pub mod inbound;
pub mod store;
