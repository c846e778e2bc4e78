// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot reviews: incremental listing, the caller's own review, and
//! create/update/delete.

use crate::error::{ClientError, Result};
use crate::gateway::{ApiGateway, RequestConfig};
use crate::models::{Page, Review};
use futures_util::Stream;
use serde::Serialize;
use validator::Validate;

/// Payload for posting a new review.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewReview {
    pub tourist_spot: u64,
    #[validate(length(min = 1))]
    pub comment: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

/// Payload for editing an existing review.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ReviewUpdate {
    #[validate(length(min = 1))]
    pub comment: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

#[derive(Clone)]
pub struct ReviewsService {
    gateway: ApiGateway,
}

impl ReviewsService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// One page of reviews for a spot.
    pub async fn for_spot(&self, spot_id: u64, limit: u32, offset: u32) -> Result<Page<Review>> {
        let config = RequestConfig::new()
            .query("tourist_spot", spot_id.to_string())
            .query("limit", limit.to_string())
            .query("offset", offset.to_string());
        let response = self
            .gateway
            .get::<Page<Review>>("/reviews/", Some(config))
            .await?;
        Ok(response.data)
    }

    /// Stream of review pages for a spot, following `next` until the
    /// listing is exhausted. Backs incremental loading in the UI.
    pub fn pages(
        &self,
        spot_id: u64,
        page_size: u32,
    ) -> impl Stream<Item = Result<Page<Review>>> + '_ {
        futures_util::stream::try_unfold(Some(0u32), move |offset| async move {
            let Some(offset) = offset else {
                return Ok(None);
            };
            let page = self.for_spot(spot_id, page_size, offset).await?;
            let next = page.has_more().then(|| offset + page_size);
            Ok(Some((page, next)))
        })
    }

    /// The signed-in user's own review of a spot, if any.
    ///
    /// The endpoint answers with an error status when no review exists;
    /// that maps to `None`. Transport failures still propagate.
    pub async fn user_review(&self, spot_id: u64) -> Result<Option<Review>> {
        let config = RequestConfig::new().query("tourist_spot", spot_id.to_string());
        match self
            .gateway
            .get::<Review>("/reviews/user-review/", Some(config))
            .await
        {
            Ok(response) => Ok(Some(response.data)),
            Err(ClientError::Api { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Post a new review. The payload is validated locally first.
    pub async fn create(&self, review: &NewReview) -> Result<Review> {
        review
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let response = self
            .gateway
            .post::<Review, _>("/reviews/", review, None)
            .await?;
        Ok(response.data)
    }

    /// Edit an existing review.
    pub async fn update(&self, id: u64, update: &ReviewUpdate) -> Result<Review> {
        update
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let response = self
            .gateway
            .put::<Review, _>(&format!("/reviews/{id}/"), update, None)
            .await?;
        Ok(response.data)
    }

    /// Delete a review.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.gateway
            .delete::<()>(&format!("/reviews/{id}/"), None)
            .await?;
        Ok(())
    }
}
