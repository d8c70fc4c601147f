//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`transport`]: [`ScriptedTransport`](transport::ScriptedTransport), an
//!   in-memory [`HttpTransport`](crate::port::HttpTransport) with queued
//!   responses and a paginating fake backend.
//! - [`fixtures`]: Raw JSON records shaped like the upstream API.
//! - [`domain`]: Builders for normalized domain values.
//! - [`config`]: Canonical test configurations.

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod transport;
