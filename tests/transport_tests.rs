//! End-to-end tests of the reqwest transport against a local HTTP fixture.

mod support;

use capitoltrades::adapter::capitoltrades::{DisclosureClient, HeaderFactory, ReqwestTransport};
use capitoltrades::domain::PoliticianId;
use capitoltrades::error::Error;
use capitoltrades::port::{HttpRequest, HttpTransport};
use capitoltrades::testkit::config::api;
use capitoltrades::testkit::fixtures::{page_json, politician_json, trade_json};
use serde_json::Value;
use support::http::{HttpFixture, RawRequest, RawResponse};

fn politicians(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| politician_json(&format!("P{i:06}"), &format!("Member{i}, Test")))
        .collect()
}

fn paged(records: &[Value], request: &RawRequest) -> RawResponse {
    let page: usize = request.param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let size: usize = request
        .param("pageSize")
        .and_then(|p| p.parse().ok())
        .unwrap_or(100);
    let start = ((page - 1) * size).min(records.len());
    let end = (start + size).min(records.len());
    RawResponse::json(page_json(&records[start..end], records.len() as u64))
}

#[tokio::test]
async fn transport_sends_path_query_and_headers() {
    let fixture = HttpFixture::start(|_| RawResponse::json(serde_json::json!({"ok": true}))).await;
    let transport = ReqwestTransport::new(&api(&fixture.base_url), None).unwrap();
    let headers = HeaderFactory::new("https://bff.capitoltrades.com").unwrap();

    let mut request = HttpRequest::new("/trades");
    request.query.push(("page".into(), "2".into()));
    request.query.push(("politician".into(), "P000197".into()));
    request.headers = headers.headers();

    let response = transport.get(&request).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.body, r#"{"ok":true}"#);

    let seen = fixture.requests_to("/trades");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].param("page"), Some("2"));
    assert_eq!(seen[0].param("politician"), Some("P000197"));
    assert_eq!(seen[0].header("origin"), Some("https://bff.capitoltrades.com"));
    assert!(seen[0].header("user-agent").is_some());
}

#[tokio::test]
async fn transport_returns_error_statuses_as_responses() {
    let fixture = HttpFixture::start(|_| RawResponse::status(503)).await;
    let transport = ReqwestTransport::new(&api(&fixture.base_url), None).unwrap();

    let response = transport.get(&HttpRequest::new("/trades")).await.unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_success());
}

#[tokio::test]
async fn client_seeds_over_http_and_reuses_session_cookies() {
    let directory = politicians(150);
    let trade = trade_json(7, "P000001", "2024-04-02", "MSFT", "buy");

    let fixture = HttpFixture::start(move |request| match request.path.as_str() {
        "/trades" if request.param("politician").is_some() => {
            RawResponse::json(page_json(std::slice::from_ref(&trade), 1))
        }
        "/trades" => RawResponse::json(page_json(&[], 0))
            .with_header("Set-Cookie", "session=warm; Path=/"),
        "/politicians" => paged(&directory, request),
        _ => RawResponse::status(404),
    })
    .await;

    let client = DisclosureClient::builder(api(&fixture.base_url))
        .initialize_direct()
        .await
        .unwrap();

    assert_eq!(client.politicians().len(), 150);
    assert_eq!(fixture.requests_to("/politicians").len(), 2);

    let id = client.lookup_politician_id("member1").cloned().unwrap();
    assert_eq!(id, PoliticianId::new("P000001"));

    let batch = client.all_trades_for(&id).await.unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.records[0].id(), "P000001-020424-MSFT-Buy");

    let seeds = fixture.requests_to("/politicians");
    assert!(seeds
        .iter()
        .all(|r| r.header("cookie").is_some_and(|c| c.contains("session=warm"))));
}

#[tokio::test]
async fn failed_warm_up_is_an_initialization_error() {
    let fixture = HttpFixture::start(|_| RawResponse::status(403)).await;

    let result = DisclosureClient::builder(api(&fixture.base_url))
        .initialize_direct()
        .await;

    match result {
        Err(Error::Initialization { source }) => {
            assert!(matches!(*source, Error::Upstream { status: 403, .. }));
        }
        Err(other) => panic!("expected Initialization error, got {other}"),
        Ok(_) => panic!("expected Initialization error, got a client"),
    }
    assert!(fixture.requests_to("/politicians").is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_an_initialization_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = DisclosureClient::builder(api(&format!("http://{addr}")))
        .initialize_direct()
        .await;

    assert!(matches!(
        result,
        Err(Error::Initialization { source }) if matches!(*source, Error::Http(_))
    ));
}
