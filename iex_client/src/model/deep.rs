//! Depth of book, trades, and the DEEP status messages.
//!
//! `Deep` bundles everything IEX publishes for one symbol. The narrower DEEP
//! endpoints return the same pieces keyed by symbol; those share the record
//! types defined here.
use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum_macros::Display;

/// One aggregated price level of the book.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceLevel {
    /// Price of the level.
    pub price: f64,
    /// Aggregate shares resting at the price.
    pub size: i64,
    /// Last update of the level.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Full depth of book and status for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deep {
    /// Ticker symbol.
    pub symbol: String,
    /// IEX share of the symbol's market volume, as a fraction.
    pub market_percent: f64,
    /// Shares traded on IEX today.
    pub volume: i64,
    /// Price of the last sale on IEX.
    pub last_sale_price: f64,
    /// Size of the last sale on IEX.
    pub last_sale_size: i64,
    /// Time of the last sale.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_sale_time: DateTime<Utc>,
    /// Time of the last update.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_updated: DateTime<Utc>,
    /// Bid levels, best first.
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first.
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    /// Latest system event.
    #[serde(default)]
    pub system_event: Option<SystemEvent>,
    /// Latest trading status.
    #[serde(default)]
    pub trading_status: Option<TradingStatus>,
    /// Latest operational halt status.
    #[serde(default)]
    pub op_halt_status: Option<OpHaltStatus>,
    /// Latest short sale price test status.
    #[serde(default)]
    pub ssr_status: Option<SsrStatus>,
    /// Latest security event.
    #[serde(default)]
    pub security_event: Option<SecurityEvent>,
    /// Recent trades, newest first.
    #[serde(default)]
    pub trades: Vec<Trade>,
    /// Recent trade breaks.
    #[serde(default)]
    pub trade_breaks: Vec<Trade>,
}

/// Bids and asks for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Bid levels, best first.
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first.
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    /// Latest system event, when present.
    #[serde(default)]
    pub system_event: Option<SystemEvent>,
}

impl Book {
    /// Best bid, if any.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Best ask, if any.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }
}

/// Trade report, also used for trade breaks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Execution price.
    pub price: f64,
    /// Execution size in shares.
    pub size: i64,
    /// IEX trade identifier, unique within the day.
    pub trade_id: i64,
    /// Intermarket sweep order.
    #[serde(rename = "isISO")]
    pub is_iso: bool,
    /// Odd lot trade.
    pub is_odd_lot: bool,
    /// Executed outside regular market hours.
    pub is_outside_regular_hours: bool,
    /// Single price cross.
    pub is_single_price_cross: bool,
    /// Exempt from the trade through rule.
    pub is_trade_through_exempt: bool,
    /// Execution time.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Exchange-wide system event codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum SystemEventCode {
    /// Start of messages.
    #[serde(rename = "O")]
    #[strum(to_string = "Start of messages")]
    StartOfMessages,
    /// Start of system hours.
    #[serde(rename = "S")]
    #[strum(to_string = "Start of system hours")]
    StartOfSystemHours,
    /// Start of regular market hours.
    #[serde(rename = "R")]
    #[strum(to_string = "Start of regular market hours")]
    StartOfRegularMarketHours,
    /// End of regular market hours.
    #[serde(rename = "M")]
    #[strum(to_string = "End of regular market hours")]
    EndOfRegularMarketHours,
    /// End of system hours.
    #[serde(rename = "E")]
    #[strum(to_string = "End of system hours")]
    EndOfSystemHours,
    /// End of messages.
    #[serde(rename = "C")]
    #[strum(to_string = "End of messages")]
    EndOfMessages,
}

/// System event message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEvent {
    /// Event code.
    pub system_event: SystemEventCode,
    /// Time of the event.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Trading status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum TradingStatusCode {
    /// Halted across all US equity markets.
    #[serde(rename = "H")]
    #[strum(to_string = "Trading halted across all US equity markets")]
    Halted,
    /// Halt released into an order acceptance period on IEX.
    #[serde(rename = "O")]
    #[strum(to_string = "Trading halt released into an order acceptance period")]
    OrderAcceptancePeriod,
    /// Paused with an order acceptance period on IEX.
    #[serde(rename = "P")]
    #[strum(to_string = "Trading paused and order acceptance period on IEX")]
    Paused,
    /// Trading on IEX.
    #[serde(rename = "T")]
    #[strum(to_string = "Trading on IEX")]
    Trading,
}

/// Trading status message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradingStatus {
    /// Status code.
    pub status: TradingStatusCode,
    /// Halt or pause reason code (e.g. `T1`, `IPO1`), blank when trading.
    #[serde(default)]
    pub reason: String,
    /// Time of the status change.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

impl TradingStatus {
    /// `true` unless the symbol is actively trading on IEX.
    pub fn is_restricted(&self) -> bool {
        self.status != TradingStatusCode::Trading
    }
}

/// Operational halt status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpHaltStatus {
    /// Halted on IEX for operational reasons.
    pub is_halted: bool,
    /// Time of the status change.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Short sale price test (Reg SHO) status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SsrStatus {
    /// Restriction in effect.
    #[serde(rename = "isSSR")]
    pub is_ssr: bool,
    /// Detail code: `A` activated, `C` continued, `D` deactivated, `N` not available.
    #[serde(default)]
    pub detail: String,
    /// Time of the status change.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Per-security event codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum SecurityEventCode {
    /// Opening process complete.
    #[strum(to_string = "Market open")]
    MarketOpen,
    /// Closing process complete.
    #[strum(to_string = "Market close")]
    MarketClose,
}

/// Security event message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    /// Event code.
    pub security_event: SecurityEventCode,
    /// Time of the event.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Auction kinds run by IEX.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum AuctionType {
    Open,
    Close,
    Halt,
    Volatility,
    #[serde(rename = "IPO")]
    #[strum(to_string = "IPO")]
    Ipo,
}

/// Auction information for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    /// Auction kind.
    pub auction_type: AuctionType,
    /// Shares paired at the reference price.
    pub paired_shares: i64,
    /// Unpaired shares at the reference price.
    pub imbalance_shares: i64,
    /// Clearing price using eligible auction orders.
    pub reference_price: f64,
    /// Clearing price using orders on the auction book.
    pub indicative_price: f64,
    /// Clearing price using orders on the auction book and continuous book.
    pub auction_book_price: f64,
    /// Reference price for the collar.
    pub collar_reference_price: f64,
    /// Lower threshold of the collar.
    pub lower_collar_price: f64,
    /// Upper threshold of the collar.
    pub upper_collar_price: f64,
    /// Number of extensions an auction received.
    pub extension_number: i64,
    /// Projected start time, `HH:MM:SS` Eastern.
    pub start_time: String,
    /// Time of the last update.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_update: DateTime<Utc>,
}
