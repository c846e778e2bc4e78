// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for bearer attachment and response normalization in the
//! request gateway.

use serde_json::{json, Value};
use wayspots::config::Config;
use wayspots::gateway::{ApiGateway, RequestConfig, TokenHandle};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::init_tracing;

fn gateway_for(server: &MockServer, token: TokenHandle) -> ApiGateway {
    let mut config = Config::test_default();
    config.api_base_url = server.uri();
    ApiGateway::new(&config, token)
}

#[tokio::test]
async fn attaches_bearer_header_when_token_present() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tourist-spots/"))
        .and(header("Authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let token = TokenHandle::new();
    token.set(Some("sekrit".to_string()));
    let gateway = gateway_for(&server, token);

    let response = gateway
        .get::<Value>("/tourist-spots/", None)
        .await
        .expect("request should match the bearer expectation");
    assert_eq!(response.status.as_u16(), 200);
}

#[tokio::test]
async fn omits_authorization_header_without_token() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tourist-spots/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, TokenHandle::new());
    gateway.get::<Value>("/tourist-spots/", None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(
        received[0].headers.get("authorization").is_none(),
        "no bearer header may be sent while unauthenticated"
    );
}

#[tokio::test]
async fn caller_supplied_authorization_wins() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me/"))
        .and(header("Authorization", "Bearer explicit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::profile_json()))
        .mount(&server)
        .await;

    // The session token says one thing, the per-call config another.
    let token = TokenHandle::new();
    token.set(Some("session-token".to_string()));
    let gateway = gateway_for(&server, token);

    gateway
        .get::<Value>("/auth/users/me/", Some(RequestConfig::bearer("explicit")))
        .await
        .expect("explicit override should be the header actually sent");

    let received = server.received_requests().await.unwrap();
    let values: Vec<_> = received[0].headers.get_all("authorization").iter().collect();
    assert_eq!(values.len(), 1, "exactly one Authorization header");
}

#[tokio::test]
async fn non_success_preserves_status_and_body() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-reset-password-code/"))
        .respond_with(ResponseTemplate::new(410).set_body_json(json!({ "detail": "code expired" })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, TokenHandle::new());
    let err = gateway
        .post::<Value, _>(
            "/auth/verify-reset-password-code/",
            &json!({ "code": "000000" }),
            None,
        )
        .await
        .expect_err("non-2xx must fail");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(410));
    assert!(err.to_string().contains("code expired"));
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reviews/3/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, TokenHandle::new());
    let response = gateway.delete::<()>("/reviews/3/", None).await.unwrap();
    assert_eq!(response.status.as_u16(), 204);
}

#[tokio::test]
async fn query_parameters_are_sent() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reviews/"))
        .and(query_param("tourist_spot", "12"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "results": [], "count": 0, "next": null })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, TokenHandle::new());
    let config = RequestConfig::new()
        .query("tourist_spot", "12")
        .query("limit", "5");
    let response = gateway.get::<Value>("/reviews/", Some(config)).await.unwrap();
    assert_eq!(response.data["count"], 0);
}
