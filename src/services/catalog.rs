// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity and location catalogs used by filters and recommendations.

use crate::error::Result;
use crate::gateway::{ApiGateway, RequestConfig};
use crate::models::{Activity, Location, Page};

#[derive(Clone)]
pub struct CatalogService {
    gateway: ApiGateway,
}

impl CatalogService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Paginated activity catalog.
    pub async fn activities(&self) -> Result<Page<Activity>> {
        let response = self
            .gateway
            .get::<Page<Activity>>("/activities-spots/", None)
            .await?;
        Ok(response.data)
    }

    /// Full activity catalog in one call.
    pub async fn all_activities(&self) -> Result<Vec<Activity>> {
        let config = RequestConfig::new().query("all", "true");
        let response = self
            .gateway
            .get::<Vec<Activity>>("/activities-spots/", Some(config))
            .await?;
        Ok(response.data)
    }

    /// Paginated location catalog.
    pub async fn locations(&self) -> Result<Page<Location>> {
        let response = self
            .gateway
            .get::<Page<Location>>("/location-spots/", None)
            .await?;
        Ok(response.data)
    }

    /// Full location catalog in one call.
    pub async fn all_locations(&self) -> Result<Vec<Location>> {
        let config = RequestConfig::new().query("all", "true");
        let response = self
            .gateway
            .get::<Vec<Location>>("/location-spots/", Some(config))
            .await?;
        Ok(response.data)
    }
}
