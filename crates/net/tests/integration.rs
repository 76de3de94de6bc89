//! Integration tests for the contents fetcher

use ghverify_config::ApiPolicy;
use ghverify_events::{channel, AppEvent, EventSender, GeneralEvent};
use ghverify_net::{fetch_file_contents, ContentsClient};
use ghverify_types::{Credential, FetchResult};
use httpmock::prelude::*;

#[tokio::test]
async fn fetch_narrates_the_request_before_sending_it() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/acme/dotfiles/contents/notes/ANSWER.md")
                .query_param("ref", "solutions");
            then.status(200).json_body(serde_json::json!({
                "encoding": "base64",
                "content": "c2hlbGwgdG9vbHM=\n",
                "sha": "9f2a41c0"
            }));
        })
        .await;
    let client = ContentsClient::new(ApiPolicy::default().with_base_url(server.base_url())).unwrap();
    let credential = Credential::new("ghp_integration", "acme");
    let (tx, mut rx) = channel();

    let result = fetch_file_contents(
        &client,
        "notes/ANSWER.md",
        &credential,
        "acme",
        "dotfiles",
        "solutions",
        &tx,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(
        result,
        FetchResult::Found {
            content: "shell tools".to_string(),
            sha: Some("9f2a41c0".to_string()),
        }
    );

    let message = rx.try_recv().unwrap();
    match message.event {
        AppEvent::General(GeneralEvent::DebugLog { message, context }) => {
            assert!(message.contains("notes/ANSWER.md"));
            assert_eq!(context.get("branch").map(String::as_str), Some("solutions"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn fetch_works_without_a_listener() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(404);
        })
        .await;
    let client = ContentsClient::new(ApiPolicy::default().with_base_url(server.base_url())).unwrap();
    let credential = Credential::new("ghp_integration", "acme");

    let result = fetch_file_contents(
        &client,
        "ANSWER.md",
        &credential,
        "acme",
        "dotfiles",
        "main",
        &None::<EventSender>,
    )
    .await;

    assert_eq!(result, FetchResult::NotFound);
}
