//! Symbol and market directories.
use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum_macros::Display;

/// Security type of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum SymbolType {
    /// Common stock.
    #[serde(rename = "cs")]
    #[strum(to_string = "Common stock")]
    CommonStock,
    /// Exchange traded fund.
    #[serde(rename = "et")]
    #[strum(to_string = "ETF")]
    Etf,
    /// Preferred stock.
    #[serde(rename = "ps")]
    #[strum(to_string = "Preferred stock")]
    PreferredStock,
    /// Real estate investment trust.
    #[serde(rename = "re")]
    #[strum(to_string = "REIT")]
    Reit,
    /// Closed end fund.
    #[serde(rename = "ce")]
    #[strum(to_string = "Closed end fund")]
    ClosedEndFund,
    /// Secondary issue.
    #[serde(rename = "si")]
    #[strum(to_string = "Secondary issue")]
    SecondaryIssue,
    /// Limited partnership.
    #[serde(rename = "lp")]
    #[strum(to_string = "Limited partnership")]
    LimitedPartnership,
    /// Cryptocurrency.
    #[serde(rename = "crypto")]
    #[strum(to_string = "Cryptocurrency")]
    Crypto,
    /// Not applicable, e.g. test symbols.
    #[serde(rename = "N/A")]
    #[strum(to_string = "N/A")]
    NotApplicable,
    /// Any type this client does not know about.
    #[serde(other)]
    #[strum(to_string = "Other")]
    Other,
}

/// Entry of the IEX symbol directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Ticker symbol.
    pub symbol: String,
    /// Issuer name.
    pub name: String,
    /// Date the directory was generated, `YYYY-MM-DD`.
    pub date: String,
    /// Whether IEX supports trading the symbol.
    pub is_enabled: bool,
    /// Security type.
    #[serde(rename = "type")]
    pub kind: SymbolType,
    /// Internal IEX identifier.
    #[serde(default, deserialize_with = "iex_common::de::string_or_number")]
    pub iex_id: Option<String>,
}

/// Volume traded on one venue, or the off-exchange total.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market identifier code; empty for off-exchange volume.
    #[serde(default)]
    pub mic: String,
    /// Tape identifier.
    #[serde(default)]
    pub tape_id: String,
    /// Venue name.
    pub venue_name: String,
    /// Shares traded today.
    pub volume: i64,
    /// Tape A shares.
    pub tape_a: i64,
    /// Tape B shares.
    pub tape_b: i64,
    /// Tape C shares.
    pub tape_c: i64,
    /// Venue share of total volume, as a fraction.
    pub market_percent: f64,
    /// Time of the last update.
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_types_decode_as_other() {
        let raw = r#"{"symbol":"A","name":"Agilent","date":"2017-04-19","isEnabled":true,"type":"wt","iexId":2}"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.kind, SymbolType::Other);
        assert_eq!(symbol.iex_id.as_deref(), Some("2"));
    }

    #[test]
    fn known_symbol_types() {
        let raw = r#"{"symbol":"SPY","name":"SPDR S&P 500","date":"2017-04-19","isEnabled":true,"type":"et","iexId":"3"}"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.kind, SymbolType::Etf);
        assert_eq!(symbol.kind.to_string(), "ETF");
    }
}
