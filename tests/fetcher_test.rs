use news_aggregator::{FetchConfig, Fetcher};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    value: u32,
}

/// One-shot HTTP responder: answers a single request with a canned response,
/// then goes away. Enough to exercise the fetch path without a real provider.
async fn spawn_responder(status_line: &'static str, body: &'static str) -> Url {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local responder");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    Url::parse(&format!("http://{}/", addr)).expect("responder url")
}

#[tokio::test]
async fn non_success_status_is_absorbed_as_an_empty_outcome() {
    let url = spawn_responder("HTTP/1.1 500 Internal Server Error", "{\"message\":\"boom\"}").await;
    let fetcher = Fetcher::new(FetchConfig::default());

    let outcome: Option<Payload> = fetcher
        .get_json("test-provider", url)
        .await
        .expect("status errors must not propagate");

    assert!(outcome.is_none());
}

#[tokio::test]
async fn malformed_body_is_absorbed_as_an_empty_outcome() {
    let url = spawn_responder("HTTP/1.1 200 OK", "this is not json").await;
    let fetcher = Fetcher::new(FetchConfig::default());

    let outcome: Option<Payload> = fetcher
        .get_json("test-provider", url)
        .await
        .expect("decode failures must not propagate");

    assert!(outcome.is_none());
}

#[tokio::test]
async fn well_formed_body_is_decoded() {
    let url = spawn_responder("HTTP/1.1 200 OK", "{\"value\":7}").await;
    let fetcher = Fetcher::new(FetchConfig::default());

    let outcome: Option<Payload> = fetcher
        .get_json("test-provider", url)
        .await
        .expect("successful fetch");

    assert_eq!(outcome, Some(Payload { value: 7 }));
}

#[tokio::test]
async fn transport_failure_propagates_as_an_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let fetcher = Fetcher::new(FetchConfig::default());
    let url = Url::parse(&format!("http://{}/", addr)).expect("url");

    let outcome = fetcher.get_json::<Payload>("test-provider", url).await;
    assert!(outcome.is_err(), "connect failures count as the adapter failing");
}

#[test]
fn decode_body_accepts_matching_shapes() {
    let decoded: Option<Payload> = Fetcher::decode_body("test-provider", "{\"value\":3}");
    assert_eq!(decoded, Some(Payload { value: 3 }));
}

#[test]
fn decode_body_rejects_mismatched_shapes() {
    let decoded: Option<Payload> = Fetcher::decode_body("test-provider", "{\"value\":\"seven\"}");
    assert!(decoded.is_none());

    let decoded: Option<Payload> = Fetcher::decode_body("test-provider", "[]");
    assert!(decoded.is_none());
}
