//! Upstream endpoint paths, relative to the API root.
use strum_macros::Display;

/// Every endpoint the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Route {
    /// Top-of-book quotes.
    #[strum(serialize = "tops")]
    Tops,
    /// Last sale reports.
    #[strum(serialize = "tops/last")]
    Last,
    /// HIST flat-file listing.
    #[strum(serialize = "hist")]
    Hist,
    /// Full depth for one symbol.
    #[strum(serialize = "deep")]
    Deep,
    /// Aggregated bids and asks.
    #[strum(serialize = "deep/book")]
    Book,
    /// Trade reports.
    #[strum(serialize = "deep/trades")]
    Trades,
    /// Current system event.
    #[strum(serialize = "deep/system-event")]
    SystemEvent,
    /// Trading status per symbol.
    #[strum(serialize = "deep/trading-status")]
    TradingStatus,
    /// Operational halt status per symbol.
    #[strum(serialize = "deep/op-halt-status")]
    OpHaltStatus,
    /// Short sale price test status per symbol.
    #[strum(serialize = "deep/ssr-status")]
    SsrStatus,
    /// Security event per symbol.
    #[strum(serialize = "deep/security-event")]
    SecurityEvent,
    /// Trade breaks.
    #[strum(serialize = "deep/trade-breaks")]
    TradeBreaks,
    /// Auction information.
    #[strum(serialize = "deep/auction")]
    Auction,
    /// Symbol directory.
    #[strum(serialize = "ref-data/symbols")]
    Symbols,
    /// Market volume per venue.
    #[strum(serialize = "market")]
    Markets,
    /// Intraday statistics.
    #[strum(serialize = "stats/intraday")]
    IntradayStats,
    /// Recent daily statistics.
    #[strum(serialize = "stats/recent")]
    RecentStats,
    /// Record statistics.
    #[strum(serialize = "stats/records")]
    RecordsStats,
    /// Monthly historical summary.
    #[strum(serialize = "stats/historical")]
    HistoricalSummary,
    /// Historical daily statistics.
    #[strum(serialize = "stats/historical/daily")]
    HistoricalDaily,
}
