// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offset/limit page shape shared by list endpoints.

use serde::{Deserialize, Serialize};

/// One page of results: `{results, count, next}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Total number of matching records
    pub count: u64,
    /// URL of the next page, or null on the last one
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
