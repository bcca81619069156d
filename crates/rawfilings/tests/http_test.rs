//! End-to-end requests against a one-shot loopback HTTP server.

use rawfilings::{
    ClientConfig, FactsRequest, FilingRequest, NoopDiagnostics, RawFilingsClient, ReqwestTransport,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single request with the given status and body, returning the request head.
async fn serve_once(
    status_line: &'static str,
    body: &'static [u8],
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nX-Filing: raw\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&head).into_owned()
    });

    (base_url, handle)
}

fn client(base_url: &str) -> RawFilingsClient<ReqwestTransport, NoopDiagnostics> {
    let config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(base_url);
    RawFilingsClient::with_parts(config, ReqwestTransport::new().unwrap(), NoopDiagnostics)
}

#[tokio::test]
async fn test_request_line_and_headers() {
    let (base_url, server) = serve_once("200 OK", b"FILING-BYTES").await;
    let client = client(&base_url);

    let request = FilingRequest::new("000032019323000064")
        .with_ticker("AAPL")
        .with_cik("");
    let response = client.fetch(&request).await.unwrap();
    let head = server.await.unwrap().to_lowercase();

    assert!(
        head.starts_with("get /filing?accession=000032019323000064&ticker=aapl http/1.1\r\n"),
        "unexpected request head: {}",
        head
    );
    assert!(!head.contains("cik="));
    assert!(head.contains("\r\nx-api-key: test-key\r\n"));
    let user_agent = format!("\r\nuser-agent: {}\r\n", rawfilings::USER_AGENT);
    assert!(head.contains(&user_agent.to_lowercase()));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"FILING-BYTES");
    assert_eq!(
        response.headers.get("x-filing").and_then(|v| v.to_str().ok()),
        Some("raw")
    );
}

#[tokio::test]
async fn test_error_status_is_returned() {
    let (base_url, server) = serve_once("503 Service Unavailable", b"upstream down").await;
    let client = client(&base_url);

    let response = client.fetch(&FilingRequest::new("1")).await.unwrap();
    server.await.unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.text(), "upstream down");
    assert_eq!(response.error_message(), "Could not retrieve filing");
}

#[tokio::test]
async fn test_save_over_http() {
    let (base_url, server) = serve_once("200 OK", b"\x00\x01binary\xff").await;
    let client = client(&base_url);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filing.bin");

    let saved = client
        .fetch_and_save(&FilingRequest::new("1"), &path)
        .await
        .unwrap();
    server.await.unwrap();

    assert!(saved);
    assert_eq!(std::fs::read(&path).unwrap(), b"\x00\x01binary\xff");
}

#[tokio::test]
async fn test_facts_and_tags_over_http() {
    let (base_url, server) = serve_once("200 OK", br#"{"tag":"Assets"}"#).await;
    let response = client(&base_url)
        .fetch_facts(&FactsRequest::new("320193", "Assets"))
        .await
        .unwrap();
    let head = server.await.unwrap().to_lowercase();

    assert!(head.starts_with("get /facts?cik=320193&tag=assets http/1.1\r\n"));
    assert!(head.contains("\r\nx-api-key: test-key\r\n"));
    assert_eq!(response.body, br#"{"tag":"Assets"}"#);

    let (base_url, server) = serve_once("200 OK", b"{}").await;
    let response = client(&base_url).fetch_tags("320193").await.unwrap();
    let head = server.await.unwrap().to_lowercase();

    assert!(head.starts_with("get /facts/tags?cik=320193 http/1.1\r\n"));
    assert_eq!(response.status, 200);
}
