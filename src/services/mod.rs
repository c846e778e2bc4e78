// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session management and typed resource access.

pub mod account;
pub mod catalog;
pub mod reviews;
pub mod routes;
pub mod session;
pub mod spots;

pub use account::{AccountService, RegisterRequest};
pub use catalog::CatalogService;
pub use reviews::{NewReview, ReviewUpdate, ReviewsService};
pub use routes::{ActivityRouteInput, NewRoute, RouteUpdate, RoutesService};
pub use session::SessionManager;
pub use spots::{SpotFilter, SpotsService};
