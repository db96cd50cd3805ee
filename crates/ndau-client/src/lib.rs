//! Async client for the ndau blockchain node HTTP API.
//!
//! The crate is a thin query shim: [`Ndau`] turns a path plus a loosely
//! typed parameter value into a GET or POST request, hands it to an
//! injectable [`HttpTransport`], and returns the raw response bytes for the
//! caller to decode. Response DTOs for the documented endpoints live in
//! [`types`], but the dispatcher itself never parses bodies.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ndau_client::types::CurrentPriceResp;
//! use ndau_client::{Ndau, NdauConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NdauConfig {
//!     network: "mainnet".to_owned(),
//!     node_api: "https://mainnet-0.ndau.tech:3030".to_owned(),
//! };
//! let client = Ndau::new(Arc::new(reqwest::Client::new()), Arc::new(config))?;
//!
//! let body = client.get_data("/price/current", &serde_json::Value::Null).await?;
//! let price: CurrentPriceResp = serde_json::from_slice(&body)?;
//! println!("market price: {}", price.market_price);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{Ndau, NdauConfig};
pub use error::NdauError;
pub use transport::HttpTransport;
