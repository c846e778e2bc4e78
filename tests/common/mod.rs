// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::json;
use wayspots::config::Config;
use wayspots::storage::SessionStore;
use wayspots::Client;

/// Install a test subscriber once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayspots=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Client against the given base URL with an in-memory store.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> Client {
    test_client_with_store(base_url, SessionStore::in_memory())
}

/// Client against the given base URL over a caller-supplied store.
#[allow(dead_code)]
pub fn test_client_with_store(base_url: &str, store: SessionStore) -> Client {
    let mut config = Config::test_default();
    config.api_base_url = base_url.to_string();
    Client::with_store(config, store)
}

/// Profile body matching what the current-user endpoint returns.
#[allow(dead_code)]
pub fn profile_json() -> serde_json::Value {
    json!({
        "id": 7,
        "last_login": "2026-08-01T09:30:00Z",
        "is_superuser": false,
        "email": "ana@example.com",
        "first_name": "Ana",
        "last_name": "Torres",
        "img_profile": "https://cdn.example.test/ana.png",
        "phone_number": "+34600111222",
        "is_active": true,
        "is_staff": false,
        "preferred_activities": [1, 3]
    })
}

/// Spot body with all fields the API serves.
#[allow(dead_code)]
pub fn spot_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "images": [{"image": format!("https://cdn.example.test/spots/{id}.jpg")}],
        "location": {"id": 2, "name": "Valley"},
        "average_rating": 4.2,
        "num_reviews": 11,
        "latitude": 40.4168,
        "longitude": -3.7038,
        "description": "A place worth the walk",
        "activities": [{"id": 1, "name": "Hiking"}]
    })
}
