//! Typed asynchronous client for the Metrc seed-to-sale REST API.
//!
//! Every call goes through a single authenticated [`Transport`]; resource accessors such as
//! [`MetrcClient::packages`] build the endpoint, encode the request body and decode the reply.
//!
//! ```no_run
//! use metrc::{LastModified, MetrcClient, MetrcConfig};
//!
//! # async fn run() -> metrc::Result<()> {
//! let config = MetrcConfig::from_env()?;
//! let client = MetrcClient::new(&config)?;
//!
//! for facility in client.facilities().list().await? {
//!     println!("{}", facility.name);
//! }
//!
//! let packages = client
//!     .packages()
//!     .active("C12-1000006-LIC", LastModified::new())
//!     .await?;
//! println!("{} active packages", packages.len());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod facilities;
pub mod filters;
pub mod harvests;
pub mod items;
pub mod locations;
pub mod models;
pub mod packages;
pub mod plant_batches;
pub mod plants;
pub mod sales;
pub mod strains;
pub mod transfers;
pub mod units_of_measure;

pub use client::{MetrcClient, MetrcClientBuilder};
pub use filters::{format_date, format_timestamp, LastModified, SalesReceiptFilter};
pub use metrc_core::client::ClientConfig;
pub use metrc_core::{Error, HttpTransport, MetrcConfig, Method, Transport, TransportRequest};

/// Convenient result alias that reuses the shared Metrc error type.
pub type Result<T> = metrc_core::Result<T>;
