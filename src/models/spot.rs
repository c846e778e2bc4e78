// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tourist spot models.

use serde::{Deserialize, Serialize};

/// A point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotImage>,
    pub location: Location,
    pub average_rating: f64,
    pub num_reviews: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// One gallery image of a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotImage {
    pub image: String,
}

/// Activity tag attached to spots (hiking, kayaking, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
}

/// Named location a spot belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
}
