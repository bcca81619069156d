//! Request parameters for the filing and facts endpoints.

/// Parameters identifying a filing to fetch.
///
/// The accession number is passed through as given; any dash stripping is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRequest {
    /// SEC accession number (e.g., "000032019323000064")
    pub accession: String,
    /// Company ticker symbol
    pub ticker: Option<String>,
    /// Company CIK number
    pub cik: Option<String>,
}

impl FilingRequest {
    /// Create a request for the given accession number.
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            ticker: None,
            cik: None,
        }
    }

    /// Attach a ticker symbol.
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Attach a CIK number.
    pub fn with_cik(mut self, cik: impl Into<String>) -> Self {
        self.cik = Some(cik.into());
        self
    }

    /// Query parameters for this request.
    ///
    /// Always contains `accession`; `ticker` and `cik` are included only
    /// when set to a non-empty value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("accession", self.accession.clone())];
        if let Some(ticker) = self.ticker.as_ref().filter(|t| !t.is_empty()) {
            params.push(("ticker", ticker.clone()));
        }
        if let Some(cik) = self.cik.as_ref().filter(|c| !c.is_empty()) {
            params.push(("cik", cik.clone()));
        }
        params
    }
}

impl From<&str> for FilingRequest {
    fn from(accession: &str) -> Self {
        Self::new(accession)
    }
}

/// Parameters selecting one XBRL tag from a company's facts.
///
/// Both values are sent as given. The server pads the CIK to ten digits
/// and rejects a missing value with a 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsRequest {
    /// Company CIK number (e.g., "320193")
    pub cik: String,
    /// XBRL tag (e.g., "Assets")
    pub tag: String,
}

impl FactsRequest {
    /// Create a request for `tag` in the facts of company `cik`.
    pub fn new(cik: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            cik: cik.into(),
            tag: tag.into(),
        }
    }

    /// Query parameters for this request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("cik", self.cik.clone()), ("tag", self.tag.clone())]
    }
}
