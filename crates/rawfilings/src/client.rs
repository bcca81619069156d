//! Raw Filings API client.

use crate::config::ClientConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::request::{FactsRequest, FilingRequest};
use crate::response::FilingResponse;
use crate::transport::{OutboundRequest, ReqwestTransport, Transport};
use std::path::Path;
use tracing::{debug, instrument};

/// User agent identifying this client to the API
pub const USER_AGENT: &str = concat!("RawFilingsClient/", env!("CARGO_PKG_VERSION"), " Rust");

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Raw filing documents
const FILING_PATH: &str = "/filing";

/// XBRL facts for one tag
const FACTS_PATH: &str = "/facts";

/// XBRL tags available for a company
const TAGS_PATH: &str = "/facts/tags";

/// Client for the Raw Filings API.
///
/// Each call performs exactly one GET against the API. Nothing
/// is retried or cached, and the only shared state is the immutable
/// configuration, so a client can be used from many tasks at once.
pub struct RawFilingsClient<T = ReqwestTransport, D = TracingDiagnostics> {
    config: ClientConfig,
    transport: T,
    diagnostics: D,
}

impl RawFilingsClient {
    /// Create a client over HTTP that logs failed fetches through `tracing`.
    ///
    /// # Example
    /// ```no_run
    /// use rawfilings::{ClientConfig, FilingRequest, RawFilingsClient};
    ///
    /// # async fn example() -> rawfilings::Result<()> {
    /// let client = RawFilingsClient::new(ClientConfig::new("your_api_key")?)?;
    /// let request = FilingRequest::new("000032019323000064").with_ticker("AAPL");
    /// let response = client.fetch(&request).await?;
    /// println!("HTTP {}: {} bytes", response.status, response.body.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_parts(
            config,
            ReqwestTransport::new()?,
            TracingDiagnostics,
        ))
    }

    /// Create a client configured from `RAW_FILINGS_API_KEY` and `RAW_FILINGS_API_URL`.
    ///
    /// # Errors
    /// Returns `ClientError::MissingCredential` if no API key is set
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport, D: Diagnostics> RawFilingsClient<T, D> {
    /// Create a client from explicit parts.
    pub const fn with_parts(config: ClientConfig, transport: T, diagnostics: D) -> Self {
        Self {
            config,
            transport,
            diagnostics,
        }
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compose the GET request that [`fetch`](Self::fetch) would send.
    pub fn outbound_request(&self, request: &FilingRequest) -> OutboundRequest {
        self.outbound(FILING_PATH, request.query_pairs())
    }

    fn outbound(&self, path: &str, query: Vec<(&'static str, String)>) -> OutboundRequest {
        OutboundRequest {
            url: self.config.endpoint_url(path),
            query,
            headers: vec![
                (API_KEY_HEADER, self.config.api_key().to_string()),
                ("User-Agent", USER_AGENT.to_string()),
            ],
        }
    }

    /// Send one GET and report a non-200 status to the diagnostics.
    async fn send(
        &self,
        path: &str,
        subject: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<FilingResponse> {
        debug!(path, "GET");
        let response = self.transport.get(self.outbound(path, query)).await?;

        if !response.is_success() {
            self.diagnostics.request_failed(
                path,
                subject,
                response.status,
                &response.error_message(),
            );
        }

        Ok(response)
    }

    /// Fetch a raw SEC filing.
    ///
    /// The response is returned for every HTTP status. When the status is
    /// not 200, an advisory message built from the error body is reported
    /// to the client's [`Diagnostics`]; the response itself is unchanged.
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the HTTP exchange fails
    #[instrument(skip_all, fields(accession = %request.accession))]
    pub async fn fetch(&self, request: &FilingRequest) -> Result<FilingResponse> {
        self.send(FILING_PATH, &request.accession, request.query_pairs()).await
    }

    /// Fetch the XBRL facts recorded under one tag for a company.
    ///
    /// The body is the server's JSON (entity name, taxonomy and the facts
    /// for the tag), returned unparsed. Statuses are handled as in
    /// [`fetch`](Self::fetch).
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the HTTP exchange fails
    ///
    /// # Example
    /// ```no_run
    /// use rawfilings::{FactsRequest, RawFilingsClient};
    ///
    /// # async fn example() -> rawfilings::Result<()> {
    /// let client = RawFilingsClient::from_env()?;
    /// let response = client
    ///     .fetch_facts(&FactsRequest::new("320193", "Assets"))
    ///     .await?;
    /// println!("{}", response.text());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all, fields(cik = %request.cik, tag = %request.tag))]
    pub async fn fetch_facts(&self, request: &FactsRequest) -> Result<FilingResponse> {
        self.send(FACTS_PATH, &request.cik, request.query_pairs()).await
    }

    /// List the XBRL tags available for a company, grouped by taxonomy.
    ///
    /// Statuses are handled as in [`fetch`](Self::fetch).
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the HTTP exchange fails
    #[instrument(skip(self))]
    pub async fn fetch_tags(&self, cik: &str) -> Result<FilingResponse> {
        self.send(TAGS_PATH, cik, vec![("cik", cik.to_string())]).await
    }

    /// Fetch a filing and write its body to `output_path`.
    ///
    /// Returns `true` if the status was 200 and the file was written. Any
    /// other status returns `false` without touching the filesystem. An
    /// existing file is overwritten.
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the HTTP exchange fails, or
    /// `ClientError::Io` if the file cannot be written
    ///
    /// # Example
    /// ```no_run
    /// use rawfilings::{FilingRequest, RawFilingsClient};
    ///
    /// # async fn example() -> rawfilings::Result<()> {
    /// let client = RawFilingsClient::from_env()?;
    /// let saved = client
    ///     .fetch_and_save(&FilingRequest::new("000032019323000064"), "apple_10k.txt")
    ///     .await?;
    /// assert!(saved);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_and_save(
        &self,
        request: &FilingRequest,
        output_path: impl AsRef<Path>,
    ) -> Result<bool> {
        let response = self.fetch(request).await?;
        if !response.is_success() {
            return Ok(false);
        }

        let output_path = output_path.as_ref();
        tokio::fs::write(output_path, &response.body).await?;
        debug!(
            path = %output_path.display(),
            bytes = response.body.len(),
            "Filing saved"
        );

        Ok(true)
    }
}

impl<T, D> std::fmt::Debug for RawFilingsClient<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawFilingsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
