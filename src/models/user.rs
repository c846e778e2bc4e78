// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account profile returned by the current-user endpoint.
///
/// Also cached serialized in the session store for optimistic display
/// on relaunch; the network copy always overwrites the cached one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    /// Last login timestamp (null for accounts that never signed in)
    pub last_login: Option<DateTime<Utc>>,
    pub is_superuser: bool,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL
    pub img_profile: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_staff: bool,
    /// Preferred activity ids used for recommendations
    #[serde(default)]
    pub preferred_activities: Vec<u64>,
}
