//!
//! Blocking client for the IEX market-data REST API.
//!
//! One method per upstream endpoint: the client builds the query string, GETs
//! it through a [`Transport`], and decodes the JSON body into typed records.
//!
//! ```no_run
//! use iex_client::IexClient;
//! use std::time::Duration;
//!
//! let http = reqwest::blocking::Client::builder()
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//! let client = IexClient::new(http);
//! let quotes = client.get_tops(&["SPY", "AAPL"])?;
//! for (symbol, quote) in &quotes {
//!     println!("{} bid={} ask={}", symbol, quote.bid_price, quote.ask_price);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate aggregates:
//! - `client` — `IexClient` and its endpoint methods.
//! - `transport` — the `Transport` seam and its reqwest implementation.
//! - `config` — `ClientConfig` for building the default transport.
//! - `request` — typed queries for the historical statistics endpoints.
//! - `route` — upstream endpoint paths.
//! - `model` — response records.
#![warn(missing_docs)]
pub mod client;
pub mod config;
pub mod model;
pub mod request;
pub mod route;
pub mod transport;

pub use client::IexClient;
pub use config::ClientConfig;
pub use iex_common::{HistoricalDate, IexError, Month, Result, Symbols};
pub use request::{HistoricalDailyRequest, HistoricalSummaryRequest};
pub use transport::{HttpResponse, Transport};
