//! Top-of-book quotes and last sale reports.
//!
//! Both endpoints answer with a JSON array of per-symbol records. Timestamps
//! are milliseconds since the Unix epoch and decode to UTC date-times.
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// IEX best quoted bid and offer plus last sale for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tops {
    /// Ticker symbol (e.g., `SPY`).
    pub symbol: String,
    /// IEX share of the symbol's market volume, as a fraction.
    pub market_percent: f64,
    /// Shares at the best bid; zero when there is no bid.
    pub bid_size: i64,
    /// Best bid price.
    pub bid_price: f64,
    /// Shares at the best offer; zero when there is no offer.
    pub ask_size: i64,
    /// Best offer price.
    pub ask_price: f64,
    /// Shares traded on IEX today.
    pub volume: i64,
    /// Price of the last sale on IEX.
    pub last_sale_price: f64,
    /// Size of the last sale on IEX.
    pub last_sale_size: i64,
    /// Time of the last sale.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_sale_time: DateTime<Utc>,
    /// Time of the last quote or trade update.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_updated: DateTime<Utc>,
    /// Sector, when upstream provides it.
    #[serde(default)]
    pub sector: Option<String>,
    /// Security type, when upstream provides it.
    #[serde(default)]
    pub security_type: Option<String>,
}

impl Tops {
    /// Midpoint of the best bid and offer, when both sides are quoted.
    pub fn midpoint(&self) -> Option<f64> {
        (self.bid_size > 0 && self.ask_size > 0).then(|| (self.bid_price + self.ask_price) / 2.0)
    }
}

/// Last sale eligible trade on IEX for one symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Last {
    /// Ticker symbol.
    pub symbol: String,
    /// Trade price.
    pub price: f64,
    /// Trade size in shares.
    pub size: i64,
    /// Execution time.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub time: DateTime<Utc>,
}
