//! Client configuration: API key and base URL.

use crate::env::{Environment, SystemEnvironment};
use crate::error::{ClientError, Result};

/// Raw Filings API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.rawfilings.ai";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "RAW_FILINGS_API_KEY";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "RAW_FILINGS_API_URL";

/// Resolved client configuration.
///
/// Immutable once built. The API key is guaranteed non-empty and the base
/// URL never ends with a slash.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration from an explicit API key and the default base URL.
    ///
    /// # Errors
    /// Returns `ClientError::MissingCredential` if `api_key` is empty
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::MissingCredential {
                env_var: API_KEY_ENV,
            });
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Replace the base URL, stripping any trailing slashes.
    ///
    /// An empty URL restores [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Resolve configuration from explicit values, falling back to the environment.
    ///
    /// The API key comes from `api_key` if given, otherwise from
    /// `RAW_FILINGS_API_KEY`. The base URL comes from `base_url` if given,
    /// otherwise from `RAW_FILINGS_API_URL`, otherwise [`DEFAULT_BASE_URL`].
    /// Empty strings count as absent.
    ///
    /// # Errors
    /// Returns `ClientError::MissingCredential` if no API key is found
    ///
    /// # Example
    /// ```
    /// use rawfilings::ClientConfig;
    /// use std::collections::HashMap;
    ///
    /// let env = HashMap::from([(
    ///     "RAW_FILINGS_API_KEY".to_string(),
    ///     "secret".to_string(),
    /// )]);
    /// let config = ClientConfig::resolve(None, Some("https://x.test/"), &env).unwrap();
    /// assert_eq!(config.filing_url(), "https://x.test/filing");
    /// ```
    pub fn resolve(
        api_key: Option<&str>,
        base_url: Option<&str>,
        env: &impl Environment,
    ) -> Result<Self> {
        let api_key = non_empty(api_key.map(str::to_string))
            .or_else(|| non_empty(env.var(API_KEY_ENV)))
            .ok_or(ClientError::MissingCredential {
                env_var: API_KEY_ENV,
            })?;

        let base_url = non_empty(base_url.map(str::to_string))
            .or_else(|| non_empty(env.var(API_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url: normalize_base_url(&base_url),
        })
    }

    /// Resolve configuration entirely from the process environment.
    ///
    /// # Errors
    /// Returns `ClientError::MissingCredential` if `RAW_FILINGS_API_KEY` is unset or empty
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None, &SystemEnvironment)
    }

    /// The API key sent in the `x-api-key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the filing endpoint.
    pub fn filing_url(&self) -> String {
        self.endpoint_url("/filing")
    }

    /// URL of an API endpoint, given its path (e.g., "/facts/tags").
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_base_url(base_url: &str) -> String {
    match base_url.trim_end_matches('/') {
        "" => DEFAULT_BASE_URL.to_string(),
        trimmed => trimmed.to_string(),
    }
}
