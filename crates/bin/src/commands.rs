//! Command handlers.

use rawfilings::{FilingRequest, FilingResponse, RawFilingsClient};
use std::io::Write;
use std::path::Path;

/// Build a request from command-line arguments.
pub(crate) fn filing_request(
    accession: String,
    ticker: Option<String>,
    cik: Option<String>,
) -> FilingRequest {
    FilingRequest {
        accession,
        ticker,
        cik,
    }
}

/// Write a response body to stdout. Returns whether the status was 200.
///
/// Error bodies are not printed; the client has already logged them.
pub(crate) fn print(response: FilingResponse) -> Result<bool, Box<dyn std::error::Error>> {
    if !response.is_success() {
        return Ok(false);
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    stdout.flush()?;
    Ok(true)
}

/// Save the filing to `path`. Returns whether the file was written.
pub(crate) async fn save(
    client: &RawFilingsClient,
    request: &FilingRequest,
    path: &Path,
) -> Result<bool, Box<dyn std::error::Error>> {
    let saved = client.fetch_and_save(request, path).await?;
    if saved {
        eprintln!("Saved filing {} to {}", request.accession, path.display());
    } else {
        eprintln!("Filing {} was not saved", request.accession);
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filing_request_keeps_empty_values() {
        let request = filing_request("1".to_string(), Some(String::new()), None);
        assert_eq!(request.ticker.as_deref(), Some(""));
        assert_eq!(request.query_pairs().len(), 1);
    }

    #[test]
    fn test_print_skips_error_body() {
        let response = FilingResponse::new(404, r#"{"message":"Not indexed yet"}"#);
        assert!(!print(response).unwrap());
    }
}
