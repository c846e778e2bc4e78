// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tourist route (itinerary) management.
//!
//! Route auto-generation itself is server-side: the client creates an
//! empty route, reads back the generated plan, and either accepts it
//! (re-submitting the stops as an update) or rejects it (deleting the
//! route).

use crate::error::{ClientError, Result};
use crate::gateway::ApiGateway;
use crate::models::{ActivityRoute, TouristRoute};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a route. Stops are always empty at creation;
/// they are added later, manually or from a generated plan.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewRoute {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    activity_routes: Vec<ActivityRouteInput>,
}

impl NewRoute {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date_start,
            date_end,
            activity_routes: Vec::new(),
        }
    }
}

/// Full-route update payload.
#[derive(Debug, Clone, Serialize)]
pub struct RouteUpdate {
    pub name: String,
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub activity_routes: Vec<ActivityRouteInput>,
}

/// Write-side representation of one stop.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRouteInput {
    pub date: DateTime<Utc>,
    pub tourist_spot: u64,
}

/// Generated-plan response shape.
#[derive(Deserialize)]
struct GeneratedActivities {
    activities_for_route: Vec<ActivityRoute>,
}

#[derive(Clone)]
pub struct RoutesService {
    gateway: ApiGateway,
}

impl RoutesService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Routes belonging to the signed-in user.
    pub async fn mine(&self) -> Result<Vec<TouristRoute>> {
        let response = self
            .gateway
            .get::<Vec<TouristRoute>>("/tourist-routes/me", None)
            .await?;
        Ok(response.data)
    }

    /// Fetch a single route by id.
    pub async fn get(&self, id: u64) -> Result<TouristRoute> {
        let response = self
            .gateway
            .get::<TouristRoute>(&format!("/tourist-routes/{id}"), None)
            .await?;
        Ok(response.data)
    }

    /// Create an empty route.
    pub async fn create(&self, route: &NewRoute) -> Result<TouristRoute> {
        route
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let response = self
            .gateway
            .post::<TouristRoute, _>("/tourist-routes/create", route, None)
            .await?;
        Ok(response.data)
    }

    /// Replace a route's fields and stops.
    pub async fn update(&self, id: u64, update: &RouteUpdate) -> Result<TouristRoute> {
        let response = self
            .gateway
            .put::<TouristRoute, _>(&format!("/tourist-routes/update/{id}"), update, None)
            .await?;
        Ok(response.data)
    }

    /// Delete a route.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.gateway
            .delete::<()>(&format!("/tourist-routes/delete/{id}"), None)
            .await?;
        Ok(())
    }

    /// Read the server-generated plan for a route.
    pub async fn generated_activities(&self, id: u64) -> Result<Vec<ActivityRoute>> {
        let response = self
            .gateway
            .get::<GeneratedActivities>(&format!("/tourist-routes/{id}/activities"), None)
            .await?;
        Ok(response.data.activities_for_route)
    }

    /// Accept a generated plan: re-submit the stops as the route's
    /// activity list. Stops without a resolvable spot are skipped.
    pub async fn accept_generated(
        &self,
        route: &TouristRoute,
        activities: &[ActivityRoute],
    ) -> Result<TouristRoute> {
        let update = RouteUpdate {
            name: route.name.clone(),
            description: route.description.clone(),
            date_start: route.date_start,
            date_end: route.date_end,
            activity_routes: activities
                .iter()
                .filter_map(|a| {
                    a.spot_id().map(|tourist_spot| ActivityRouteInput {
                        date: a.date,
                        tourist_spot,
                    })
                })
                .collect(),
        };
        self.update(route.id, &update).await
    }

    /// Append one spot to an existing route, keeping its current stops.
    pub async fn add_spot(
        &self,
        route: &TouristRoute,
        spot_id: u64,
        date: DateTime<Utc>,
    ) -> Result<TouristRoute> {
        let mut stops: Vec<ActivityRouteInput> = route
            .activity_routes
            .iter()
            .filter_map(|a| {
                a.spot_id().map(|tourist_spot| ActivityRouteInput {
                    date: a.date,
                    tourist_spot,
                })
            })
            .collect();
        stops.push(ActivityRouteInput {
            date,
            tourist_spot: spot_id,
        });

        let update = RouteUpdate {
            name: route.name.clone(),
            description: route.description.clone(),
            date_start: route.date_start,
            date_end: route.date_end,
            activity_routes: stops,
        };
        self.update(route.id, &update).await
    }
}
