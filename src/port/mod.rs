//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`HttpTransport`] - Single GET against the disclosure API
//! - [`DocumentStore`] - Persistence for normalized trades

pub mod store;
pub mod transport;

pub use store::DocumentStore;
pub use transport::{HttpRequest, HttpResponse, HttpTransport};
