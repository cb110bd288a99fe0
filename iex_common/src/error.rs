//! Error types shared by the client crates.
//!
//! The `IexError` enum unifies the failure cases of a call against the IEX API:
//! the request never completing, the upstream answering with an error status,
//! or the body not decoding into the expected shape. A few extra variants cover
//! local input such as configuration values, dates and symbol files.
use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Unified error type shared by the workspace.
#[derive(Error, Debug)]
pub enum IexError {
    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The upstream API answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body, as returned by the server.
        body: String,
    },

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL and route did not form a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration value with a human-readable message.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Date or month outside the calendar.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// I/O error while reading a symbol list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A symbol argument was blank where one is required, or held a token
    /// that is not a valid symbol.
    #[error("Parse symbols error: {0}")]
    ParseSymbols(String),
}

impl IexError {
    /// Wraps any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        IexError::Transport(Box::new(err))
    }

    /// HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            IexError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
