//! Inbound adapters: entry points that drive the application.

pub mod cli;
