//! # metrc-core
//!
//! Core types for talking to the Metrc seed-to-sale REST API.
//!
//! This crate provides the authenticated transport every resource accessor is built
//! on, together with configuration, error handling, and query-string helpers.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and operation context wrapping
//! - [`config`] - Client configuration and credential loading
//! - [`client`] - HTTP timeouts and connection pool tuning
//! - [`query`] - Query parameter builder
//! - [`transport`] - The [`Transport`] abstraction and its `reqwest` implementation

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod transport;

// Re-export commonly used types
pub use config::MetrcConfig;
pub use error::{Error, Result};
pub use transport::{HttpTransport, HttpTransportBuilder, Method, Transport, TransportRequest};
