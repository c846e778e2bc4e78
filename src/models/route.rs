// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tourist route (itinerary) models.

use crate::models::Spot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A personal multi-day itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristRoute {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    #[serde(default)]
    pub activity_routes: Vec<ActivityRoute>,
}

/// One scheduled stop within a route.
///
/// The read side may embed the full spot (generated plans do) or only
/// carry the spot id; the write side sends `{date, tourist_spot}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRoute {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub activity: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub spot: Option<Spot>,
    #[serde(default)]
    pub tourist_spot: Option<u64>,
}

impl ActivityRoute {
    /// Spot id of this stop, from either representation.
    pub fn spot_id(&self) -> Option<u64> {
        self.tourist_spot.or_else(|| self.spot.as_ref().map(|s| s.id))
    }
}
