//! End-to-end tests: mock users API over HTTP, full fetch, rendered reports.

#[allow(dead_code)]
mod common;

use common::*;
use serde_json::json;
use user_reports::{Error, FetchError, HttpPageSource, SuffixOrder, UserFetcher, run};
use wiremock::MockServer;

#[tokio::test]
async fn test_pages_until_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 100, users_page(1, 100)).await;
    mount_page(&server, 2, 100, users_page(101, 100)).await;
    mount_page(&server, 3, 100, users_page(201, 37)).await;
    mount_page(&server, 4, 100, json!([])).await;

    let config = config_for(&server, 100);
    let fetcher = UserFetcher::new(HttpPageSource::new(&config.api).unwrap(), 100);
    let (users, stats) = fetcher.fetch_all_users_with_stats().await.unwrap();

    assert_eq!(users.len(), 237);
    assert!(users.iter().map(|u| u.id).eq(1..=237));
    assert_eq!(stats.pages_requested, 4);
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_empty_first_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 100, json!([])).await;

    let config = config_for(&server, 100);
    let fetcher = UserFetcher::new(HttpPageSource::new(&config.api).unwrap(), 100);
    let users = fetcher.fetch_all_users().await.unwrap();

    assert!(users.is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_on_second_page_prints_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 100, users_page(1, 100)).await;
    mount_status(&server, 2, 500).await;

    let config = config_for(&server, 100);
    let mut out = Vec::new();
    let err = run(&config, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("HTTP 500"), "message: {err}");
    match err {
        Error::Fetch(FetchError::Status { page, status, .. }) => {
            assert_eq!(page, 2);
            assert_eq!(status, 500);
        }
        other => panic!("expected fetch status error, got {other:?}"),
    }
    assert!(out.is_empty(), "no report may be written after a failed fetch");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_full_run_renders_both_reports() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        2,
        json!([
            user_json(1, "a@b.test", "Active"),
            user_json(2, "c@d.com", "active"),
        ]),
    )
    .await;
    mount_page(
        &server,
        2,
        2,
        json!([
            user_json(3, "e@f.test", "inactive"),
            {"id": 4, "email": "bad-email", "status": "active"},
        ]),
    )
    .await;
    mount_page(
        &server,
        3,
        2,
        json!([{"id": 5, "email": "w@nodot", "status": null, "extra": {"nested": true}}]),
    )
    .await;
    mount_page(&server, 4, 2, json!([])).await;

    let config = config_for(&server, 2);
    let mut out = Vec::new();
    let stats = run(&config, &mut out).await.unwrap();

    assert_eq!(stats.records, 5);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "=== Question 1: Active users with .test emails ===\n\
         id,email\n\
         1,a@b.test\n\
         \n\
         === Question 2: Email domain suffix counts ===\n\
         Domain,count\n\
         com,1\n\
         test,2\n"
    );
}

#[tokio::test]
async fn test_count_descending_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        100,
        json!([
            user_json(1, "a@x.com", "inactive"),
            user_json(2, "b@x.test", "inactive"),
            user_json(3, "c@x.test", "inactive"),
        ]),
    )
    .await;
    mount_page(&server, 2, 100, json!([])).await;

    let mut config = config_for(&server, 100);
    config.report.suffix_order = SuffixOrder::CountDescending;
    let mut out = Vec::new();
    run(&config, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(
        output.ends_with("Domain,count\ntest,2\ncom,1\n"),
        "unexpected output:\n{output}"
    );
}

#[tokio::test]
async fn test_malformed_page_body_is_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 100, json!({"message": "Resource not found"})).await;

    let config = config_for(&server, 100);
    let mut out = Vec::new();
    let err = run(&config, &mut out).await.unwrap_err();

    assert!(matches!(err, Error::Fetch(FetchError::Decode { page: 1, .. })));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_invalid_config_fails_before_any_request() {
    let server = MockServer::start().await;

    let config = config_for(&server, 0);
    let mut out = Vec::new();
    let err = run(&config, &mut out).await.unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
