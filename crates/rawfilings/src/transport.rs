//! HTTP transport used by the filing client.
//!
//! The client composes an [`OutboundRequest`] and hands it to a
//! [`Transport`]. [`ReqwestTransport`] performs the real exchange; tests
//! substitute their own implementation.

use crate::error::Result;
use crate::response::FilingResponse;
use std::future::Future;
use tracing::debug;

/// A fully composed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Target URL, without query string
    pub url: String,
    /// Query parameters in send order
    pub query: Vec<(&'static str, String)>,
    /// Request headers
    pub headers: Vec<(&'static str, String)>,
}

impl OutboundRequest {
    /// Value of the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs a single HTTP GET.
///
/// Implementations must not retry. Any status code is a successful
/// exchange; only failures to complete the exchange are errors.
pub trait Transport: Send + Sync {
    /// Send `request` and collect the full response.
    fn get(&self, request: OutboundRequest) -> impl Future<Output = Result<FilingResponse>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings.
    ///
    /// No timeout is configured.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: OutboundRequest) -> Result<FilingResponse> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        debug!(status, url = %request.url, "Response received");

        let body = response.bytes().await?.to_vec();

        Ok(FilingResponse {
            status,
            body,
            headers,
        })
    }
}
