//! Compact date forms used on the IEX wire.
//!
//! Query parameters carry days as `YYYYMMDD` and months as `YYYYMM`. HIST
//! records echo the day back in the same compact form.
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::error::IexError;

const COMPACT_DAY: &str = "%Y%m%d";

/// Formats a day as `YYYYMMDD`.
pub fn compact(date: NaiveDate) -> String {
    date.format(COMPACT_DAY).to_string()
}

/// Parses a `YYYYMMDD` day.
pub fn parse_compact(s: &str) -> Result<NaiveDate, IexError> {
    NaiveDate::parse_from_str(s, COMPACT_DAY)
        .map_err(|e| IexError::InvalidDate(format!("{:?}: {}", s, e)))
}

/// Serde helper decoding a `YYYYMMDD` string into a `NaiveDate`.
pub fn deserialize_compact<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_compact(&s).map_err(serde::de::Error::custom)
}

/// Calendar month, rendered as `YYYYMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Validated constructor; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, IexError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(IexError::InvalidDate(format!("{}-{:02}", year, month)));
        }
        Ok(Month { year, month })
    }

    /// Year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month component.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// Day or month selector for the historical statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoricalDate {
    /// A single trading day, sent as `YYYYMMDD`.
    Day(NaiveDate),
    /// A whole month, sent as `YYYYMM`.
    Month(Month),
}

impl fmt::Display for HistoricalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoricalDate::Day(day) => f.write_str(&compact(*day)),
            HistoricalDate::Month(month) => fmt::Display::fmt(month, f),
        }
    }
}

impl From<NaiveDate> for HistoricalDate {
    fn from(date: NaiveDate) -> Self {
        HistoricalDate::Day(date)
    }
}

impl From<Month> for HistoricalDate {
    fn from(month: Month) -> Self {
        HistoricalDate::Month(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_compact_forms() {
        let day = NaiveDate::from_ymd_opt(2017, 6, 6).unwrap();
        assert_eq!(compact(day), "20170606");
        assert_eq!(HistoricalDate::from(day).to_string(), "20170606");
        assert_eq!(HistoricalDate::from(Month::from(day)).to_string(), "201706");
        assert_eq!(parse_compact("20170606").unwrap(), day);
    }

    #[test]
    fn rejects_out_of_calendar_values() {
        assert!(matches!(Month::new(2017, 13), Err(IexError::InvalidDate(_))));
        assert!(matches!(Month::new(2017, 0), Err(IexError::InvalidDate(_))));
        assert!(parse_compact("2017-06-06").is_err());
        assert_eq!(Month::new(2018, 1).unwrap().to_string(), "201801");
    }

    #[test]
    fn deserializes_compact_day() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "deserialize_compact")]
            date: NaiveDate,
        }
        let row: Row = serde_json::from_str(r#"{"date":"20170606"}"#).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2017, 6, 6).unwrap());
        assert!(serde_json::from_str::<Row>(r#"{"date":"June"}"#).is_err());
    }
}
