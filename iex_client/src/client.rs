//! The IEX API client.
//!
//! Every method follows the same path: build the endpoint URL and its query
//! string, GET it through the transport, and decode the JSON body into the
//! method's result type. Non-2xx responses become `IexError::Status` with the
//! upstream body; bodies that do not fit the expected shape become
//! `IexError::Decode`. Nothing is retried or cached.
use std::collections::BTreeMap;

use chrono::NaiveDate;
use iex_common::{IexError, Result, Symbols, date};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{ClientConfig, DEFAULT_BASE_URL, parse_base_url};
use crate::model::{
    Auction, Book, Deep, Hist, HistoricalSummary, IntradayStats, Last, Market, OpHaltStatus,
    Records, SecurityEvent, SsrStatus, Stats, Symbol, SystemEvent, Tops, Trade, TradingStatus,
};
use crate::request::{HistoricalDailyRequest, HistoricalSummaryRequest};
use crate::route::Route;
use crate::transport::Transport;

type Query = Vec<(&'static str, String)>;

/// Client for the IEX market-data API.
///
/// Holds no mutable state; it is `Send + Sync` whenever its transport is, so
/// one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct IexClient<T = reqwest::blocking::Client> {
    transport: T,
    base_url: String,
}

impl IexClient<reqwest::blocking::Client> {
    /// Creates a client on top of a caller-configured reqwest client.
    ///
    /// Timeouts and TLS settings are taken from `http` as is.
    pub fn new(http: reqwest::blocking::Client) -> Self {
        IexClient::with_transport(http)
    }

    /// Creates a client whose reqwest transport is built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        IexClient::new(config.build_http()?).with_base_url(&config.base_url)
    }
}

impl<T: Transport> IexClient<T> {
    /// Creates a client on top of any transport, pointed at the production API.
    pub fn with_transport(transport: T) -> Self {
        IexClient {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at another API root, e.g. a sandbox or a local mock.
    ///
    /// The root may carry a path but no query or fragment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        parse_base_url(base_url)?;
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// API root every route is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Top-of-book quotes keyed by symbol. An empty `symbols` selects every symbol.
    pub fn get_tops<S: AsRef<str>>(&self, symbols: &[S]) -> Result<BTreeMap<String, Tops>> {
        let tops: Vec<Tops> = self.get_json(Route::Tops, symbols_query(symbols)?)?;
        Ok(tops.into_iter().map(|t| (t.symbol.clone(), t)).collect())
    }

    /// Last sale reports keyed by symbol. An empty `symbols` selects every symbol.
    pub fn get_last<S: AsRef<str>>(&self, symbols: &[S]) -> Result<BTreeMap<String, Last>> {
        let last: Vec<Last> = self.get_json(Route::Last, symbols_query(symbols)?)?;
        Ok(last.into_iter().map(|l| (l.symbol.clone(), l)).collect())
    }

    /// HIST files for one trading day, in upstream order.
    ///
    /// Days without data yield an empty vector.
    pub fn get_hist(&self, day: NaiveDate) -> Result<Vec<Hist>> {
        self.get_json(Route::Hist, vec![("date", date::compact(day))])
    }

    /// HIST files for every available day, keyed and ordered by `YYYYMMDD`.
    pub fn get_all_available_hist(&self) -> Result<BTreeMap<String, Vec<Hist>>> {
        self.get_json(Route::Hist, Vec::new())
    }

    /// Full depth of book for one symbol.
    pub fn get_deep(&self, symbol: &str) -> Result<Deep> {
        let symbols = Symbols::new([symbol])?;
        if symbols.len() != 1 {
            return Err(IexError::ParseSymbols(format!(
                "DEEP needs exactly one symbol, got {:?}",
                symbol
            )));
        }
        self.get_json(Route::Deep, vec![("symbols", symbols.to_string())])
    }

    /// Bids and asks keyed by symbol.
    pub fn get_book<S: AsRef<str>>(&self, symbols: &[S]) -> Result<BTreeMap<String, Book>> {
        self.get_json(Route::Book, symbols_query(symbols)?)
    }

    /// Recent trades keyed by symbol; `last` caps the count per symbol.
    pub fn get_trades<S: AsRef<str>>(
        &self,
        symbols: &[S],
        last: Option<u32>,
    ) -> Result<BTreeMap<String, Vec<Trade>>> {
        self.get_json(Route::Trades, with_last(symbols_query(symbols)?, last))
    }

    /// Current exchange-wide system event.
    pub fn get_system_event(&self) -> Result<SystemEvent> {
        self.get_json(Route::SystemEvent, Vec::new())
    }

    /// Trading status keyed by symbol.
    pub fn get_trading_status<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BTreeMap<String, TradingStatus>> {
        self.get_json(Route::TradingStatus, symbols_query(symbols)?)
    }

    /// Operational halt status keyed by symbol.
    pub fn get_op_halt_status<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BTreeMap<String, OpHaltStatus>> {
        self.get_json(Route::OpHaltStatus, symbols_query(symbols)?)
    }

    /// Short sale price test status keyed by symbol.
    pub fn get_ssr_status<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BTreeMap<String, SsrStatus>> {
        self.get_json(Route::SsrStatus, symbols_query(symbols)?)
    }

    /// Latest security event keyed by symbol.
    pub fn get_security_event<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BTreeMap<String, SecurityEvent>> {
        self.get_json(Route::SecurityEvent, symbols_query(symbols)?)
    }

    /// Trade breaks keyed by symbol; `last` caps the count per symbol.
    pub fn get_trade_breaks<S: AsRef<str>>(
        &self,
        symbols: &[S],
        last: Option<u32>,
    ) -> Result<BTreeMap<String, Vec<Trade>>> {
        self.get_json(Route::TradeBreaks, with_last(symbols_query(symbols)?, last))
    }

    /// Auction information keyed by symbol.
    pub fn get_auction<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BTreeMap<String, Auction>> {
        self.get_json(Route::Auction, symbols_query(symbols)?)
    }

    /// The IEX symbol directory.
    pub fn get_symbols(&self) -> Result<Vec<Symbol>> {
        self.get_json(Route::Symbols, Vec::new())
    }

    /// Volume per market venue.
    pub fn get_markets(&self) -> Result<Vec<Market>> {
        self.get_json(Route::Markets, Vec::new())
    }

    /// Statistics for the current trading day.
    pub fn get_intraday_stats(&self) -> Result<IntradayStats> {
        self.get_json(Route::IntradayStats, Vec::new())
    }

    /// Daily statistics for the last trading days.
    pub fn get_recent_stats(&self) -> Result<Vec<Stats>> {
        self.get_json(Route::RecentStats, Vec::new())
    }

    /// Record values of the main statistics.
    pub fn get_records_stats(&self) -> Result<Records> {
        self.get_json(Route::RecordsStats, Vec::new())
    }

    /// Monthly trading summary.
    pub fn get_historical_summary(
        &self,
        request: &HistoricalSummaryRequest,
    ) -> Result<Vec<HistoricalSummary>> {
        self.get_json(Route::HistoricalSummary, request.query())
    }

    /// Daily statistics for a day, a month, or the last N trading days.
    pub fn get_historical_daily(&self, request: &HistoricalDailyRequest) -> Result<Vec<Stats>> {
        self.get_json(Route::HistoricalDaily, request.query())
    }

    fn endpoint(&self, route: Route, query: &[(&'static str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, route))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn get_json<R: DeserializeOwned>(&self, route: Route, query: Query) -> Result<R> {
        let url = self.endpoint(route, &query)?;
        debug!("GET {}", url);

        let response = self.transport.fetch(&url)?;
        if !response.is_success() {
            let body = response.text();
            warn!("{} answered HTTP {}: {}", route, response.status, body.trim());
            return Err(IexError::Status {
                status: response.status,
                body,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            error!("Failed to decode {} response: {}", route, e);
            IexError::Decode(e)
        })
    }
}

fn symbols_query<S: AsRef<str>>(symbols: &[S]) -> Result<Query> {
    Ok(Symbols::new(symbols)?
        .to_query()
        .map(|joined| vec![("symbols", joined)])
        .unwrap_or_default())
}

fn with_last(mut query: Query, last: Option<u32>) -> Query {
    if let Some(last) = last {
        query.push(("last", last.to_string()));
    }
    query
}
