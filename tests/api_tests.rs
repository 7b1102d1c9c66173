//
//  gerrit-rest-client
//  tests/api_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests of the REST client against a mock Gerrit server.

use gerrit_rest_client::api::{ApiError, GerritClient, GerritRestApi, ListOptions};
use gerrit_rest_client::auth::AuthCredential;
use gerrit_rest_client::extensions::changes::ReviewInput;
use gerrit_rest_client::extensions::GerritApi;
use mockito::{Matcher, Server};

const JSON: &str = "application/json; charset=utf-8";

fn api_for(server: &Server) -> GerritRestApi {
    GerritRestApi::from_client(GerritClient::new(&server.url()).unwrap())
}

#[tokio::test]
async fn version_is_returned_from_prefixed_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/config/server/version")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(")]}'\n\"2.9\"")
        .create_async()
        .await;

    let version = api_for(&server)
        .config()
        .unwrap()
        .server()
        .unwrap()
        .get_version()
        .await
        .unwrap();

    assert_eq!(version, "2.9");
    mock.assert_async().await;
}

#[tokio::test]
async fn version_falls_back_on_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/config/server/version")
        .with_status(404)
        .with_header("content-type", "text/plain")
        .with_body("Not Found")
        .create_async()
        .await;

    let version = api_for(&server)
        .config()
        .unwrap()
        .server()
        .unwrap()
        .get_version()
        .await
        .unwrap();

    assert_eq!(version, "<2.8");
}

#[tokio::test]
async fn version_uses_configured_sentinel() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/config/server/version")
        .with_status(403)
        .create_async()
        .await;

    let version = api_for(&server)
        .with_version_sentinel("2.7")
        .config()
        .unwrap()
        .server()
        .unwrap()
        .get_version()
        .await
        .unwrap();

    assert_eq!(version, "2.7");
}

#[tokio::test]
async fn version_server_error_is_raised() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/config/server/version")
        .with_status(500)
        .with_body("Internal server error")
        .create_async()
        .await;

    let err = api_for(&server)
        .config()
        .unwrap()
        .server()
        .unwrap()
        .get_version()
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn project_names_are_encoded_as_one_segment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/platform%2Fbuild/commits/674ac754/in")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(")]}'\n{\"branches\": [\"master\"], \"tags\": [\"v1.0\"]}")
        .create_async()
        .await;

    let included = api_for(&server)
        .projects()
        .unwrap()
        .name("platform/build")
        .unwrap()
        .commit("674ac754")
        .unwrap()
        .included_in()
        .await
        .unwrap();

    assert_eq!(included.branches, vec!["master"]);
    assert_eq!(included.tags, vec!["v1.0"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn authenticated_requests_use_prefix_and_basic_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/a/accounts/self")
        .match_header("authorization", "Basic amRvZTpwdw==")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(")]}'\n{\"_account_id\": 1000096, \"name\": \"John Doe\", \"username\": \"jdoe\"}")
        .create_async()
        .await;

    let client = GerritClient::new(&server.url())
        .unwrap()
        .with_auth(AuthCredential::basic("jdoe", "pw"));
    let account = GerritRestApi::from_client(client)
        .accounts()
        .unwrap()
        .self_account()
        .unwrap()
        .get()
        .await
        .unwrap();

    assert_eq!(account.account_id, Some(1000096));
    assert_eq!(account.username.as_deref(), Some("jdoe"));
    mock.assert_async().await;
}

#[tokio::test]
async fn change_query_sends_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/changes/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "status:open project:demo".into()),
            Matcher::UrlEncoded("n".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(
            r#")]}'
[
  {
    "id": "demo~master~Ideaf1a3e",
    "project": "demo",
    "branch": "master",
    "change_id": "Ideaf1a3e",
    "subject": "Add feature",
    "status": "NEW",
    "created": "2013-02-01 09:59:32.126000000",
    "_number": 3965,
    "_more_changes": true
  }
]"#,
        )
        .create_async()
        .await;

    let changes = api_for(&server)
        .changes()
        .unwrap()
        .query("status:open project:demo", &ListOptions::new().limit(2))
        .await
        .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].number, Some(3965));
    assert!(changes[0].created.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn file_content_is_base64_decoded() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "GET",
            "/changes/3965/revisions/current/files/docs%2FREADME.md/content",
        )
        .with_status(200)
        .with_header("content-type", "text/plain; charset=ISO-8859-1")
        .with_body("IyBSRUFETUUK")
        .create_async()
        .await;

    let content = api_for(&server)
        .changes()
        .unwrap()
        .id("3965")
        .unwrap()
        .current()
        .unwrap()
        .file("docs/README.md")
        .unwrap()
        .content()
        .await
        .unwrap();

    assert_eq!(content.as_string().unwrap(), "# README\n");
}

#[tokio::test]
async fn review_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/changes/3965/revisions/1/review")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "message": "Looks good",
            "labels": {"Code-Review": 2}
        })))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(")]}'\n{\"labels\": {\"Code-Review\": 2}}")
        .create_async()
        .await;

    let result = api_for(&server)
        .changes()
        .unwrap()
        .id("3965")
        .unwrap()
        .revision("1")
        .unwrap()
        .review(&ReviewInput::new().message("Looks good").label("Code-Review", 2))
        .await
        .unwrap();

    assert_eq!(result.labels.unwrap()["Code-Review"], 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_topic_body_is_empty_string() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/changes/3965/topic")
        .with_status(204)
        .create_async()
        .await;

    let topic = api_for(&server)
        .changes()
        .unwrap()
        .id("3965")
        .unwrap()
        .topic()
        .await
        .unwrap();

    assert_eq!(topic, "");
}

#[tokio::test]
async fn missing_required_field_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/projects/gerrit/commits/abc/in")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(")]}'\n{\"branches\": [\"master\"]}")
        .create_async()
        .await;

    let err = api_for(&server)
        .projects()
        .unwrap()
        .name("gerrit")
        .unwrap()
        .commit("abc")
        .unwrap()
        .included_in()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn connection_failure_has_no_status() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = GerritClient::new("http://127.0.0.1:9").unwrap();
    let err = GerritRestApi::from_client(client)
        .config()
        .unwrap()
        .server()
        .unwrap()
        .get_version()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}
