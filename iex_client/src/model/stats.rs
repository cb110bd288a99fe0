//! IEX exchange statistics.
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single intraday statistic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    /// Current value.
    pub value: f64,
    /// Time of the last update.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_updated: DateTime<Utc>,
}

/// Statistics for the current trading day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntradayStats {
    /// Shares executed on IEX.
    pub volume: StatValue,
    /// Distinct symbols traded.
    pub symbols_traded: StatValue,
    /// Shares routed to other venues.
    pub routed_volume: StatValue,
    /// Dollar value executed.
    pub notional: StatValue,
    /// IEX share of US equity volume.
    #[serde(default)]
    pub market_share: Option<StatValue>,
}

/// Record value of one statistic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Highest value on record.
    pub record_value: f64,
    /// Day the record was set, `YYYY-MM-DD`.
    pub record_date: String,
    /// Previous trading day's value.
    pub previous_day_value: f64,
    /// Average over the last 30 trading days.
    pub avg30_value: f64,
}

/// Records for the main exchange statistics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    /// Shares executed.
    pub volume: Record,
    /// Distinct symbols traded.
    pub symbols_traded: Record,
    /// Shares routed.
    pub routed_volume: Record,
    /// Dollar value executed.
    pub notional: Record,
}

/// Daily statistics, returned by the recent and historical daily endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Trading day, `YYYY-MM-DD`.
    pub date: String,
    /// Shares executed on IEX.
    pub volume: i64,
    /// Shares routed to other venues.
    pub routed_volume: i64,
    /// IEX share of US equity volume.
    pub market_share: f64,
    /// Shortened trading session.
    #[serde(default, deserialize_with = "iex_common::de::flag")]
    pub is_halfday: bool,
    /// Shares executed against displayed liquidity.
    #[serde(default)]
    pub lit_volume: i64,
}

/// Monthly summary of IEX trading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct HistoricalSummary {
    pub average_daily_volume: f64,
    pub average_daily_routed_volume: f64,
    pub average_market_share: f64,
    pub average_order_size: f64,
    pub average_fill_size: f64,
    pub bin100_percent: f64,
    pub bin101_percent: f64,
    pub bin200_percent: f64,
    pub bin300_percent: f64,
    pub bin400_percent: f64,
    pub bin500_percent: f64,
    pub bin1000_percent: f64,
    pub bin5000_percent: f64,
    pub bin10000_percent: f64,
    pub bin10000_trades: i64,
    pub bin20000_trades: i64,
    pub bin50000_trades: i64,
    pub unique_symbols_traded: i64,
    pub block_percent: f64,
    pub self_cross_percent: f64,
    pub etf_percent: f64,
    pub large_cap_percent: f64,
    pub mid_cap_percent: f64,
    pub small_cap_percent: f64,
}
