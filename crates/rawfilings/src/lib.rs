#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/HWallaballa/raw-filings-mcp/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{RawFilingsClient, USER_AGENT};
pub use config::{API_KEY_ENV, API_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use env::{Environment, SystemEnvironment};
pub use error::{ClientError, Result};
pub use request::{FactsRequest, FilingRequest};
pub use response::FilingResponse;
pub use transport::{OutboundRequest, ReqwestTransport, Transport};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
