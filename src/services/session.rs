// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session manager: owns authentication state and keeps it in sync
//! with the local session store.
//!
//! Handles:
//! - Sign-in (rejected credentials become an inline error message,
//!   anything else propagates to the caller)
//! - Profile fetch with scrub-on-failure semantics
//! - Idempotent sign-out
//! - Rehydration of a persisted session at startup

use crate::error::Result;
use crate::gateway::{ApiGateway, RequestConfig, TokenHandle};
use crate::models::UserProfile;
use crate::storage::{keys, SessionStore};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Message published when the remote rejects the credentials.
const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";
/// Message published when the profile fetch fails.
const PROFILE_FETCH_FAILED_MESSAGE: &str = "Could not load the user profile";

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token endpoint response.
#[derive(Deserialize)]
struct TokenResponse {
    access: String,
}

/// In-memory session state published to the rest of the app.
#[derive(Default)]
struct SessionState {
    token: Option<String>,
    profile: Option<UserProfile>,
    /// True until rehydration has completed
    loading: bool,
    error: Option<String>,
}

/// Authentication state manager.
///
/// One instance per app process, constructed explicitly and injected
/// into whatever needs it. Clones share the same state.
#[derive(Clone)]
pub struct SessionManager {
    gateway: ApiGateway,
    store: SessionStore,
    /// Token accessor shared with the gateway
    token: TokenHandle,
    state: Arc<RwLock<SessionState>>,
    /// Session generation. Bumped on every sign-in and sign-out so
    /// in-flight profile fetches from an earlier session are discarded
    /// instead of repopulating state.
    epoch: Arc<AtomicU64>,
}

impl SessionManager {
    pub fn new(gateway: ApiGateway, store: SessionStore, token: TokenHandle) -> Self {
        Self {
            gateway,
            store,
            token,
            state: Arc::new(RwLock::new(SessionState {
                loading: true,
                ..SessionState::default()
            })),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    // ─── Published State ─────────────────────────────────────────────────────

    /// Current session token, or `None` when unauthenticated.
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Current user profile, or `None`.
    pub fn user_profile(&self) -> Option<UserProfile> {
        self.state.read().profile.clone()
    }

    /// True only while the persisted session has not been loaded yet.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Last user-visible error message, or `None`.
    pub fn last_error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Whether a session token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    // ─── Operations ──────────────────────────────────────────────────────────

    /// Restore persisted session state. Call once at startup.
    ///
    /// Loads the stored token and the cached profile copy so the app
    /// can display them immediately, then silently resumes the session:
    /// a stored token without a profile in memory triggers a fetch.
    pub async fn rehydrate(&self) {
        let stored_token = self.store.read(keys::SESSION).await;
        let cached_profile = match self.store.read(keys::USER_PROFILE).await {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable cached profile");
                    None
                }
            },
            None => None,
        };

        let needs_fetch = stored_token.is_some() && cached_profile.is_none();
        {
            let mut state = self.state.write();
            state.token = stored_token.clone();
            state.profile = cached_profile;
            state.loading = false;
        }
        self.token.set(stored_token.clone());

        if let Some(token) = stored_token {
            tracing::info!("Resuming persisted session");
            if needs_fetch {
                let epoch = self.epoch.load(Ordering::SeqCst);
                self.fetch_profile_guarded(&token, epoch).await;
            }
        }
    }

    /// Authenticate with email/password credentials.
    ///
    /// Rejected credentials (401) set a user-visible error message and
    /// return `Ok`; the token is never set. Any other failure is
    /// returned to the caller for contextual handling (a 403 sends the
    /// app to the verification flow, for example).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        self.state.write().error = None;

        let request = SignInRequest { email, password };
        let response = match self
            .gateway
            .post::<TokenResponse, _>("/auth/jwt/create/", &request, None)
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_unauthorized() => {
                self.state.write().error = Some(BAD_CREDENTIALS_MESSAGE.to_string());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let token = response.data.access;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        // Commit the token before the profile fetch is triggered.
        self.store.write(keys::SESSION, Some(token.clone())).await;
        self.token.set(Some(token.clone()));
        self.state.write().token = Some(token.clone());

        tracing::info!("Signed in");
        self.fetch_profile_guarded(&token, epoch).await;
        Ok(())
    }

    /// Refresh the user profile using the given token.
    ///
    /// Failures are absorbed: profile state is scrubbed from memory and
    /// storage and an error message is published. No stale profile is
    /// ever observable after a failed refresh.
    pub async fn fetch_user_profile(&self, token: &str) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.fetch_profile_guarded(token, epoch).await;
    }

    async fn fetch_profile_guarded(&self, token: &str, epoch: u64) {
        // Drop the warm copy first so a failed refresh cannot leave
        // stale data behind.
        self.store.write(keys::USER_PROFILE, None).await;

        let config = RequestConfig::bearer(token);
        match self
            .gateway
            .get::<UserProfile>("/auth/users/me/", Some(config))
            .await
        {
            Ok(response) => {
                if self.epoch.load(Ordering::SeqCst) != epoch {
                    tracing::debug!("Discarding profile response from a stale session");
                    return;
                }
                let serialized = serde_json::to_string(&response.data);
                self.state.write().profile = Some(response.data);
                match serialized {
                    Ok(raw) => self.store.write(keys::USER_PROFILE, Some(raw)).await,
                    Err(e) => tracing::warn!(error = %e, "Failed to serialize profile for caching"),
                }
            }
            Err(e) => {
                if self.epoch.load(Ordering::SeqCst) != epoch {
                    tracing::debug!("Ignoring profile fetch failure from a stale session");
                    return;
                }
                tracing::warn!(error = %e, "Profile fetch failed");
                {
                    let mut state = self.state.write();
                    state.profile = None;
                    state.error = Some(PROFILE_FETCH_FAILED_MESSAGE.to_string());
                }
                self.store.write(keys::USER_PROFILE, None).await;
            }
        }
    }

    /// Drop the session. Safe to call when already signed out.
    pub async fn sign_out(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.token.set(None);
        {
            let mut state = self.state.write();
            state.token = None;
            state.profile = None;
            state.error = None;
        }
        self.store.write(keys::SESSION, None).await;
        self.store.write(keys::USER_PROFILE, None).await;
        tracing::info!("Signed out");
    }
}
