//! Tests for the HTTP suggestion client

use std::net::TcpListener;

use mockito::{Matcher, Server};

use super::*;

fn fetcher_for(endpoint: &str) -> HttpFetcher {
    let config = SourceConfig {
        endpoint: endpoint.to_string(),
        ..SourceConfig::default()
    };
    HttpFetcher::new(&config).unwrap()
}

#[test]
fn test_request_url_for_preload_has_no_query() {
    let fetcher = fetcher_for("https://example.test/users");
    assert_eq!(
        fetcher.request_url(&FetchQuery::All).as_str(),
        "https://example.test/users"
    );
}

#[test]
fn test_request_url_appends_query_param() {
    let fetcher = fetcher_for("https://example.test/users");
    let url = fetcher.request_url(&FetchQuery::Matching("mar".to_string()));
    assert_eq!(url.as_str(), "https://example.test/users?q=mar");
}

#[test]
fn test_request_url_encodes_query() {
    let fetcher = fetcher_for("https://example.test/users");
    let url = fetcher.request_url(&FetchQuery::Matching("a b&c".to_string()));
    assert_eq!(url.as_str(), "https://example.test/users?q=a+b%26c");
}

#[test]
fn test_custom_query_param() {
    let config = SourceConfig {
        endpoint: "https://example.test/users".to_string(),
        query_param: "search".to_string(),
        ..SourceConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();
    let url = fetcher.request_url(&FetchQuery::Matching("x".to_string()));
    assert_eq!(url.query(), Some("search=x"));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let config = SourceConfig {
        endpoint: "not a url".to_string(),
        ..SourceConfig::default()
    };
    let result = HttpFetcher::new(&config);
    assert!(matches!(result, Err(FetchError::InvalidEndpoint { .. })));
}

#[tokio::test]
async fn test_fetch_decodes_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::UrlEncoded("q".into(), "mar".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"name":"Margo","email":"m@x"},{"id":2,"name":"Mark"}]"#)
        .expect(1)
        .create_async()
        .await;
    let fetcher = fetcher_for(&format!("{}/users", server.url()));

    let result = fetcher
        .fetch(&FetchQuery::Matching("mar".to_string()))
        .await
        .unwrap();

    assert_eq!(
        result,
        vec![Suggestion::new(1, "Margo"), Suggestion::new(2, "Mark")]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_preload_fetch_sends_no_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(r#"[{"id":3,"name":"Bob"}]"#)
        .expect(1)
        .create_async()
        .await;
    let fetcher = fetcher_for(&format!("{}/users", server.url()));

    let result = fetcher.fetch(&FetchQuery::All).await.unwrap();

    assert_eq!(result, vec![Suggestion::new(3, "Bob")]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/users")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;
    let fetcher = fetcher_for(&format!("{}/users", server.url()));

    let result = fetcher.fetch(&FetchQuery::All).await;

    match result {
        Err(FetchError::Status { code, url }) => {
            assert_eq!(code, 500);
            assert!(url.ends_with("/users"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_undecodable_body() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"users": []}"#)
        .create_async()
        .await;
    let fetcher = fetcher_for(&format!("{}/users", server.url()));

    let result = fetcher.fetch(&FetchQuery::All).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let fetcher = fetcher_for(&format!("http://127.0.0.1:{}/users", port));

    let result = fetcher.fetch(&FetchQuery::All).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
