// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot review models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review left on a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    /// Spot the review belongs to
    pub tourist_spot: u64,
    pub user: ReviewAuthor,
    pub comment: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

/// Author snapshot embedded in each review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub img_profile: String,
}
