//! Response records decoded from the IEX JSON payloads.
//!
//! This module groups the serializable types returned by the client:
//! - `tops` — top-of-book quotes and last sale reports.
//! - `hist` — HIST flat-file metadata.
//! - `deep` — depth of book, trades, and the DEEP status messages.
//! - `reference` — symbol and market directories.
//! - `stats` — IEX exchange statistics.
pub mod deep;
pub mod hist;
pub mod reference;
pub mod stats;
pub mod tops;

pub use deep::{
    Auction, AuctionType, Book, Deep, OpHaltStatus, PriceLevel, SecurityEvent, SecurityEventCode,
    SsrStatus, SystemEvent, SystemEventCode, Trade, TradingStatus, TradingStatusCode,
};
pub use hist::Hist;
pub use reference::{Market, Symbol, SymbolType};
pub use stats::{HistoricalSummary, IntradayStats, Record, Records, StatValue, Stats};
pub use tops::{Last, Tops};
