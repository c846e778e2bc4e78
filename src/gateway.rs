// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated request gateway for the remote API.
//!
//! Wraps outbound HTTP calls, attaching the current session token as a
//! bearer credential. The token is read from a shared [`TokenHandle`]
//! at dispatch time, so a sign-out between two in-flight requests is
//! observed independently by each.

use crate::config::Config;
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Shared handle to the current bearer token.
///
/// The session manager is the only writer; the gateway reads the value
/// on every outgoing request.
#[derive(Clone, Default)]
pub struct TokenHandle {
    inner: Arc<parking_lot::RwLock<Option<String>>>,
}

impl TokenHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, or `None` when unauthenticated.
    pub fn current(&self) -> Option<String> {
        self.inner.read().clone()
    }

    /// Publish a new token value (`None` clears it).
    pub fn set(&self, token: Option<String>) {
        *self.inner.write() = token;
    }
}

/// Per-call configuration: extra headers and query parameters.
///
/// Caller-supplied headers take precedence over gateway defaults
/// (last-write-wins on the header map), so an explicit `Authorization`
/// here overrides the session token.
#[derive(Debug, Default, Clone)]
pub struct RequestConfig {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter to the request.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Override the bearer credential for this call only.
    pub fn bearer(token: &str) -> Self {
        Self::new().header(AUTHORIZATION.as_str(), format!("Bearer {token}"))
    }
}

/// Normalized successful response: decoded body plus HTTP status.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
}

/// HTTP gateway bound to a fixed base endpoint.
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
    token: TokenHandle,
}

impl ApiGateway {
    /// Create a gateway reading its bearer credential from `token`.
    pub fn new(config: &Config, token: TokenHandle) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::GET, path, None::<&()>, config).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::POST, path, Some(body), config).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::PUT, path, Some(body), config).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::PATCH, path, Some(body), config).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::DELETE, path, None::<&()>, config)
            .await
    }

    /// Dispatch a request and normalize the response.
    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse<T>> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let config = config.unwrap_or_default();

        // Bearer first, caller headers after: last write wins.
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token.current() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Internal(anyhow::anyhow!("Invalid token value: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Internal(anyhow::anyhow!("Invalid header name: {}", e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Internal(anyhow::anyhow!("Invalid header value: {}", e)))?;
            headers.insert(name, value);
        }

        let mut request = self.http.request(method, &url).headers(headers);
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }

        // Some endpoints answer 2xx with an empty body (DELETE mostly);
        // decode those as JSON null.
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let data = if text.is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_str(&text)
        }
        .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(ApiResponse { data, status })
    }
}
