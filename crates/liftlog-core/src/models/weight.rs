// ABOUTME: Body-weight sample model, one reading per calendar day
// ABOUTME: Natural ordering is by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single body-weight reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Calendar day of the reading
    pub date: NaiveDate,
    /// Body weight in pounds
    #[serde(rename = "weight_lbs")]
    pub weight: f64,
}

impl WeightSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}
