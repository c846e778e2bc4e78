// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wayspots: client SDK for the Wayspots tourism-discovery API.
//!
//! This crate provides the session/authentication core and typed
//! resource access used by the mobile app: browse spots, read and post
//! reviews, and manage multi-day tourist routes. All business logic
//! (search ranking, recommendation, route generation) lives behind the
//! remote API; this client handles state, persistence, and transport.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod services;
pub mod storage;

use config::Config;
use gateway::{ApiGateway, TokenHandle};
use services::{
    AccountService, CatalogService, ReviewsService, RoutesService, SessionManager, SpotsService,
};
use storage::SessionStore;

/// Shared client state: one instance per app process.
///
/// Construction wires the pieces explicitly: the store backs the
/// session manager, and the gateway reads the current token through a
/// shared [`TokenHandle`] the session manager publishes to.
pub struct Client {
    pub config: Config,
    pub store: SessionStore,
    pub session: SessionManager,
    pub spots: SpotsService,
    pub routes: RoutesService,
    pub reviews: ReviewsService,
    pub catalog: CatalogService,
    pub account: AccountService,
}

impl Client {
    /// Create a client with a file-backed session store at the
    /// configured path.
    pub fn new(config: Config) -> Self {
        let store = SessionStore::open(config.session_store_path.clone());
        Self::with_store(config, store)
    }

    /// Create a client over a caller-supplied store (tests swap in an
    /// in-memory one).
    pub fn with_store(config: Config, store: SessionStore) -> Self {
        let token = TokenHandle::new();
        let gateway = ApiGateway::new(&config, token.clone());
        let session = SessionManager::new(gateway.clone(), store.clone(), token);

        Self {
            config,
            store,
            session,
            spots: SpotsService::new(gateway.clone()),
            routes: RoutesService::new(gateway.clone()),
            reviews: ReviewsService::new(gateway.clone()),
            catalog: CatalogService::new(gateway.clone()),
            account: AccountService::new(gateway),
        }
    }
}
