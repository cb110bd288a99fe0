//! The HTTP seam between the client and the network.
//!
//! `IexClient` only needs one capability from HTTP: issue a GET for a URL and
//! hand back the status and the raw body. Keeping that behind `Transport` lets
//! tests serve canned responses instead of reaching the live API. Timeouts,
//! TLS and proxies belong to whatever transport the caller plugs in.
use std::sync::Arc;

use iex_common::{IexError, Result};
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a response from a status and anything convertible into bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a GET request and returns the response.
///
/// Implementations report failures to send the request or read the body as
/// `IexError::Transport`. Non-2xx statuses are *not* errors at this layer.
pub trait Transport: Send + Sync {
    /// Performs a GET request for `url`.
    fn fetch(&self, url: &Url) -> Result<HttpResponse>;
}

impl Transport for reqwest::blocking::Client {
    fn fetch(&self, url: &Url) -> Result<HttpResponse> {
        let response = self
            .get(url.clone())
            .send()
            .map_err(IexError::transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(IexError::transport)?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn fetch(&self, url: &Url) -> Result<HttpResponse> {
        (**self).fetch(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn fetch(&self, url: &Url) -> Result<HttpResponse> {
        (**self).fetch(url)
    }
}
