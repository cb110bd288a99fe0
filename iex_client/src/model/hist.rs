//! HIST flat-file metadata.
use chrono::NaiveDate;
use serde::Deserialize;

/// Download link and description of one HIST data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hist {
    /// URL of the pcap file.
    pub link: String,
    /// Trading day the file covers.
    #[serde(deserialize_with = "iex_common::date::deserialize_compact")]
    pub date: NaiveDate,
    /// Feed name, `TOPS` or `DEEP`.
    pub feed: String,
    /// Feed version.
    pub version: String,
    /// Capture protocol, e.g. `IEXTP1`.
    pub protocol: String,
    /// File size in bytes; upstream sends it as a quoted integer.
    #[serde(deserialize_with = "iex_common::de::stringified_u64")]
    pub size: u64,
}
