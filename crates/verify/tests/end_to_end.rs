//! Full runs against a mock contents endpoint

use ghverify_config::ApiPolicy;
use ghverify_events::channel;
use ghverify_net::ContentsClient;
use ghverify_types::{Credential, Expectation, FailureReason};
use ghverify_verify::run_verification;
use httpmock::prelude::*;

const CONTENTS_PATH: &str = "/repos/acme/missing-semester/contents/ANSWER.md";

fn credential() -> Credential {
    Credential::new("ghp_e2e", "acme")
}

fn expectation(expected: &str) -> Expectation {
    Expectation::new("missing-semester", "main", "ANSWER.md", expected)
}

fn client_for(server: &MockServer) -> ContentsClient {
    ContentsClient::new(ApiPolicy::default().with_base_url(server.base_url())).unwrap()
}

#[tokio::test]
async fn raw_content_with_trailing_newline_passes() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(CONTENTS_PATH)
                .query_param("ref", "main")
                .header("authorization", "Bearer ghp_e2e");
            then.status(200)
                .json_body(serde_json::json!({ "content": "hello world\n" }));
        })
        .await;
    let (tx, _rx) = channel();

    let report = run_verification(
        &client_for(&server),
        &credential(),
        &expectation("hello world"),
        &tx,
    )
    .await;

    mock.assert_hits_async(1).await;
    assert!(report.passed());
    assert_eq!(report.verdict.exit_code(), 0);
}

#[tokio::test]
async fn base64_content_is_decoded_before_comparison() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(200).json_body(serde_json::json!({
                "encoding": "base64",
                "content": "aGVsbG8=",
                "sha": "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"
            }));
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation("hello"), &tx).await;

    assert!(report.passed());
    assert_eq!(report.content_chars, Some(5));
    assert_eq!(
        report.sha.as_deref(),
        Some("b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0")
    );
}

#[tokio::test]
async fn different_content_fails_and_shows_both_strings() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(200)
                .json_body(serde_json::json!({ "content": "goodbye" }));
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation("hello"), &tx).await;

    assert_eq!(report.verdict.exit_code(), 1);
    let rendered = report.verdict.failure().unwrap().to_string();
    assert!(rendered.contains("hello"));
    assert!(rendered.contains("goodbye"));
}

#[tokio::test]
async fn missing_file_fails_as_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(404)
                .json_body(serde_json::json!({ "message": "Not Found" }));
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation("hello"), &tx).await;

    assert_eq!(report.verdict.exit_code(), 1);
    assert!(matches!(
        report.verdict.failure(),
        Some(FailureReason::NotFound { .. })
    ));
}

#[tokio::test]
async fn server_error_fails_with_a_bounded_snippet() {
    let server = MockServer::start_async().await;
    let body = format!("Internal error...{}", "!".repeat(1_000));
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(500).body(&body);
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation("hello"), &tx).await;

    match report.verdict.failure() {
        Some(FailureReason::Api {
            status,
            body_snippet,
        }) => {
            assert_eq!(*status, 500);
            assert!(body_snippet.chars().count() <= 100);
            assert!(body_snippet.starts_with("Internal error..."));
        }
        other => panic!("unexpected failure: {other:?}"),
    }
}

#[tokio::test]
async fn empty_file_fails_as_a_mismatch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(200)
                .json_body(serde_json::json!({ "encoding": "base64", "content": "" }));
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation("hello"), &tx).await;

    assert_eq!(report.content_chars, Some(0));
    assert_eq!(
        report.verdict.failure(),
        Some(&FailureReason::Mismatch {
            expected: "hello".to_string(),
            actual: String::new(),
        })
    );
}

#[tokio::test]
async fn empty_file_passes_against_whitespace_only_expectation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CONTENTS_PATH);
            then.status(200)
                .json_body(serde_json::json!({ "encoding": "base64", "content": "" }));
        })
        .await;
    let (tx, _rx) = channel();

    let report =
        run_verification(&client_for(&server), &credential(), &expectation(" \n"), &tx).await;

    assert!(report.passed());
    assert_eq!(report.content_chars, Some(0));
}
