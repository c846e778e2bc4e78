// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use reqwest::StatusCode;
use wayspots::error::ClientError;

#[test]
fn test_is_unauthorized_matches() {
    let err = ClientError::Api {
        status: StatusCode::UNAUTHORIZED,
        body: "{\"detail\":\"invalid credentials\"}".to_string(),
    };
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_is_unauthorized_no_match() {
    let err = ClientError::Api {
        status: StatusCode::FORBIDDEN,
        body: String::new(),
    };
    assert!(!err.is_unauthorized());

    let err = ClientError::Network("connection refused".to_string());
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), None);
}

#[test]
fn test_not_found_predicate() {
    let err = ClientError::Api {
        status: StatusCode::NOT_FOUND,
        body: String::new(),
    };
    assert!(err.is_not_found());

    let err = ClientError::Validation("rating out of range".to_string());
    assert!(!err.is_not_found());
}

#[test]
fn test_api_error_display_keeps_body() {
    let err = ClientError::Api {
        status: StatusCode::GONE,
        body: "code expired".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("410"));
    assert!(rendered.contains("code expired"));
}
