//! [`DocumentStore`](crate::port::DocumentStore) adapters.

mod memory;

pub use memory::InMemoryStore;
