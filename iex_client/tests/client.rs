//! Endpoint tests for quotes, HIST, depth, directories and historical statistics.
mod common;

use chrono::NaiveDate;
use common::{MockTransport, client, fixture, serving};
use iex_client::model::SymbolType;
use iex_client::{HistoricalDailyRequest, Month};

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_string(), v.to_string())
}

#[test]
fn tops_returns_one_quote_per_symbol() {
    let mock = serving("tops", "tops");
    let symbols = ["SPY", "AAPL"];
    let result = client(&mock).get_tops(&symbols).unwrap();

    assert_eq!(result.len(), symbols.len());
    assert_eq!(result["SPY"].bid_price, 244.79);
    assert_eq!(result["AAPL"].security_type.as_deref(), Some("commonstock"));
    assert_eq!(mock.last_request().path(), "/1.0/tops");
    assert_eq!(mock.last_query(), vec![pair("symbols", "SPY,AAPL")]);
}

#[test]
fn tops_with_no_symbols_requests_all() {
    let mock = serving("tops", "tops_all");
    let none: [&str; 0] = [];
    let result = client(&mock).get_tops(&none).unwrap();

    assert!(!result.is_empty());
    assert_eq!(mock.last_request().query(), None);
}

#[test]
fn tops_normalizes_symbols() {
    let mock = serving("tops", "tops");
    client(&mock).get_tops(&[" spy", "aapl", "SPY"]).unwrap();
    assert_eq!(mock.last_query(), vec![pair("symbols", "SPY,AAPL")]);
}

#[test]
fn last_returns_one_trade_per_symbol() {
    let mock = serving("tops/last", "last");
    let symbols = vec!["SPY".to_string(), "AAPL".to_string()];
    let result = client(&mock).get_last(&symbols).unwrap();

    assert_eq!(result.len(), symbols.len());
    assert_eq!(result["AAPL"].size, 50);
    assert_eq!(result["SPY"].time.timestamp_millis(), 1_496_951_999_999);
}

#[test]
fn hist_for_one_date() {
    let mock = serving("hist", "hist_day");
    let day = NaiveDate::from_ymd_opt(2017, 6, 6).unwrap();
    let result = client(&mock).get_hist(day).unwrap();

    assert!(!result.is_empty());
    assert!(result.iter().all(|h| h.date == day));
    assert_eq!(result[0].feed, "DEEP");
    assert_eq!(result[0].size, 4_109_140_543);
    assert_eq!(mock.last_query(), vec![pair("date", "20170606")]);
}

#[test]
fn hist_for_date_without_data_is_empty() {
    let mock = MockTransport::new();
    mock.respond("hist", 200, "[]");
    let day = NaiveDate::from_ymd_opt(2017, 6, 10).unwrap();
    assert!(client(&mock).get_hist(day).unwrap().is_empty());
}

#[test]
fn hist_for_all_dates_is_ordered_by_day() {
    let mock = serving("hist", "hist_all");
    let result = client(&mock).get_all_available_hist().unwrap();

    assert_eq!(result.keys().collect::<Vec<_>>(), vec!["20170606", "20170607"]);
    assert_eq!(result["20170606"].len(), 2);
    assert_eq!(mock.last_request().query(), None);
}

#[test]
fn deep_echoes_requested_symbol() {
    let mock = serving("deep", "deep");
    let result = client(&mock).get_deep("SPY").unwrap();

    assert_eq!(result.symbol, "SPY");
    assert_eq!(result.bids.len(), 2);
    assert_eq!(result.trades[0].trade_id, 517_341_294);
    assert!(result.trade_breaks.is_empty());
    assert_eq!(
        result.security_event.map(|e| e.security_event.to_string()).as_deref(),
        Some("Market open")
    );
    assert_eq!(mock.last_query(), vec![pair("symbols", "SPY")]);
}

#[test]
fn deep_for_unknown_symbol_fails() {
    let mock = MockTransport::new();
    mock.respond("deep", 200, "{}");
    let err = client(&mock).get_deep("NOPE").unwrap_err();
    assert!(matches!(err, iex_client::IexError::Decode(_)));
}

#[test]
fn book_returns_one_entry_per_symbol() {
    let mock = serving("deep/book", "book");
    let symbols = ["SPY"];
    let result = client(&mock).get_book(&symbols).unwrap();

    assert_eq!(result.len(), symbols.len());
    let book = &result["SPY"];
    assert_eq!(book.best_ask().map(|l| l.price), Some(244.82));
    assert_eq!(book.asks.len(), 2);
}

#[test]
fn symbols_have_name_and_date() {
    let mock = serving("ref-data/symbols", "symbols");
    let symbols = client(&mock).get_symbols().unwrap();

    assert!(!symbols.is_empty());
    for symbol in &symbols {
        assert!(!symbol.symbol.is_empty() && !symbol.name.is_empty() && !symbol.date.is_empty());
    }
    assert_eq!(symbols[1].iex_id.as_deref(), Some("2417"));
    assert_eq!(symbols[2].kind, SymbolType::NotApplicable);
    assert!(symbols[3].iex_id.is_none());
    assert_eq!(mock.last_request().as_str(), "http://iex.test/1.0/ref-data/symbols");
}

#[test]
fn markets_include_off_exchange_total() {
    let mock = serving("market", "markets");
    let markets = client(&mock).get_markets().unwrap();

    assert_eq!(markets.len(), 3);
    assert_eq!(markets[1].mic, "XNGS");
    assert_eq!(markets[2].venue_name, "Total");
    assert!(markets[2].mic.is_empty());
}

#[test]
fn historical_daily_last_five() {
    let mock = serving("stats/historical/daily", "stats_daily");
    let stats = client(&mock)
        .get_historical_daily(&HistoricalDailyRequest::last(5))
        .unwrap();

    assert_eq!(stats.len(), 5);
    assert!(stats[4].is_halfday);
    assert!(!stats[0].is_halfday);
    assert_eq!(mock.last_query(), vec![pair("last", "5")]);
}

#[test]
fn historical_daily_for_month() {
    let mock = serving("stats/historical/daily", "stats_daily");
    let request = HistoricalDailyRequest::month(Month::new(2017, 6).unwrap());
    client(&mock).get_historical_daily(&request).unwrap();
    assert_eq!(mock.last_query(), vec![pair("date", "201706")]);
}

#[test]
fn fixtures_load() {
    assert!(fixture("tops").starts_with('['));
}
