// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the remote API.

pub mod page;
pub mod review;
pub mod route;
pub mod spot;
pub mod user;

pub use page::Page;
pub use review::{Review, ReviewAuthor};
pub use route::{ActivityRoute, TouristRoute};
pub use spot::{Activity, Location, Spot, SpotImage};
pub use user::UserProfile;
