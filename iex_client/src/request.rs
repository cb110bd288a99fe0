//! Typed request configurations for the historical statistics endpoints.
use chrono::NaiveDate;
use iex_common::{HistoricalDate, Month};

/// Query for `stats/historical/daily`.
///
/// Upstream accepts either a `date` (a day as `YYYYMMDD` or a month as
/// `YYYYMM`) or `last`, the number of most recent trading days. When both are
/// set both are sent and the upstream decides; when neither is set the
/// upstream default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalDailyRequest {
    /// Day or month to report on.
    pub date: Option<HistoricalDate>,
    /// Number of most recent trading days to return.
    pub last: Option<u32>,
}

impl HistoricalDailyRequest {
    /// The `n` most recent trading days.
    pub fn last(n: u32) -> Self {
        HistoricalDailyRequest {
            date: None,
            last: Some(n),
        }
    }

    /// A single trading day.
    pub fn on(day: NaiveDate) -> Self {
        HistoricalDailyRequest {
            date: Some(HistoricalDate::Day(day)),
            last: None,
        }
    }

    /// Every trading day of a month.
    pub fn month(month: Month) -> Self {
        HistoricalDailyRequest {
            date: Some(HistoricalDate::Month(month)),
            last: None,
        }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(date) = self.date {
            query.push(("date", date.to_string()));
        }
        if let Some(last) = self.last {
            query.push(("last", last.to_string()));
        }
        query
    }
}

/// Query for `stats/historical`; without a month the upstream reports the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalSummaryRequest {
    /// Month to summarize.
    pub month: Option<Month>,
}

impl HistoricalSummaryRequest {
    /// Summary for `month`.
    pub fn for_month(month: Month) -> Self {
        HistoricalSummaryRequest { month: Some(month) }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        self.month
            .map(|month| vec![("date", month.to_string())])
            .unwrap_or_default()
    }
}
