// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tourist spot queries.

use crate::error::Result;
use crate::gateway::{ApiGateway, RequestConfig};
use crate::models::{Page, Spot};
use serde::Deserialize;

/// Server-side filter for the paginated spot listing.
#[derive(Debug, Default, Clone)]
pub struct SpotFilter {
    /// Name search (substring match on the server)
    pub name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Results envelope used by the recommendation endpoint.
#[derive(Deserialize)]
struct ResultsEnvelope<T> {
    results: Vec<T>,
}

/// Spot listing, detail, and recommendation queries.
#[derive(Clone)]
pub struct SpotsService {
    gateway: ApiGateway,
}

impl SpotsService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// List spots with server-side search and pagination.
    pub async fn list(&self, filter: &SpotFilter) -> Result<Page<Spot>> {
        let mut config = RequestConfig::new();
        if let Some(name) = &filter.name {
            config = config.query("name", name.clone());
        }
        if let Some(limit) = filter.limit {
            config = config.query("limit", limit.to_string());
        }
        if let Some(offset) = filter.offset {
            config = config.query("offset", offset.to_string());
        }

        let response = self
            .gateway
            .get::<Page<Spot>>("/tourist-spots/", Some(config))
            .await?;
        Ok(response.data)
    }

    /// Fetch every spot in one call (used for client-side filtering).
    pub async fn list_all(&self) -> Result<Vec<Spot>> {
        let config = RequestConfig::new().query("all", "true");
        let response = self
            .gateway
            .get::<Vec<Spot>>("/tourist-spots/", Some(config))
            .await?;
        Ok(response.data)
    }

    /// Fetch a single spot by id.
    pub async fn get(&self, id: u64) -> Result<Spot> {
        let response = self
            .gateway
            .get::<Spot>(&format!("/tourist-spots/{id}/"), None)
            .await?;
        Ok(response.data)
    }

    /// Server-ranked recommendations, optionally narrowed to a location
    /// and/or activity. Omitted filters send `all`.
    pub async fn recommended(
        &self,
        location_id: Option<u64>,
        activity_id: Option<u64>,
    ) -> Result<Vec<Spot>> {
        let location = location_id.map_or_else(|| "all".to_string(), |id| id.to_string());
        let activity = activity_id.map_or_else(|| "all".to_string(), |id| id.to_string());
        let config = RequestConfig::new()
            .query("location_id", location)
            .query("activity_id", activity);

        let response = self
            .gateway
            .get::<ResultsEnvelope<Spot>>("/tourist-spots/recommended/", Some(config))
            .await?;
        Ok(response.data.results)
    }
}
