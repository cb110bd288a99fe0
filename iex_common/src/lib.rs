//!
//! Common types and utilities shared by the IEX client crates.
//!
//! This crate aggregates:
//! - `error` — unified error type `IexError` used across the workspace.
//! - `result` — handy `Result<T, IexError>` alias.
//! - `symbols` — symbol list normalization and text parsing helpers.
//! - `date` — compact `YYYYMMDD` / `YYYYMM` date forms used on the wire.
//! - `de` — lenient decoders for fields whose JSON type varies upstream.
#![warn(missing_docs)]
pub mod date;
pub mod de;
pub mod error;
pub mod result;
pub mod symbols;

pub use date::{HistoricalDate, Month};
pub use error::IexError;
pub use result::Result;
pub use symbols::{SymbolParser, Symbols};
