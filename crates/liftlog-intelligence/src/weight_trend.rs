// ABOUTME: Rolling average engine for the body-weight series
// ABOUTME: Trailing 7-sample mean, day-over-day change, and whole-series summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight trend analysis
//!
//! The window is counted in samples, not calendar days, and is short at the
//! start of the series rather than zero-padded. Samples sharing a date are
//! collapsed before any computation: the later sample in input order wins.
#![allow(clippy::cast_precision_loss)] // Safe: window length is at most 7

use chrono::NaiveDate;
use liftlog_core::constants::weight::{CHANGE_ROUNDING_FACTOR, ROLLING_WINDOW_SAMPLES};
use liftlog_core::models::WeightSample;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One point of the weight chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTrendPoint {
    /// Day of the reading
    pub date: NaiveDate,
    /// Reading in pounds
    #[serde(rename = "weight_lbs")]
    pub weight: f64,
    /// Mean of this reading and up to six before it
    #[serde(rename = "rolling_7d_avg")]
    pub rolling_7day_avg: f64,
    /// Difference from the previous reading; absent for the first
    pub change: Option<f64>,
}

/// Sort by date and collapse duplicate dates, last write wins
#[must_use]
pub fn normalize_samples(samples: &[WeightSample]) -> Vec<WeightSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.date);

    let mut normalized: Vec<WeightSample> = Vec::with_capacity(sorted.len());
    for sample in sorted {
        match normalized.last_mut() {
            Some(last) if last.date == sample.date => {
                warn!(
                    date = %sample.date,
                    replaced = last.weight,
                    kept = sample.weight,
                    "Duplicate weight sample date, keeping the later entry"
                );
                *last = sample;
            }
            _ => normalized.push(sample),
        }
    }
    normalized
}

/// Rolling average and change for every sample
#[must_use]
pub fn weight_trend(samples: &[WeightSample]) -> Vec<WeightTrendPoint> {
    let samples = normalize_samples(samples);

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let start = (i + 1).saturating_sub(ROLLING_WINDOW_SAMPLES);
            let window = &samples[start..=i];
            let mean = window.iter().map(|s| s.weight).sum::<f64>() / window.len() as f64;

            WeightTrendPoint {
                date: sample.date,
                weight: sample.weight,
                rolling_7day_avg: mean,
                change: i
                    .checked_sub(1)
                    .map(|prev| sample.weight - samples[prev].weight),
            }
        })
        .collect()
}

/// Whole-series reductions for the summary card
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    /// First reading, 0 when there are none
    pub start_weight: f64,
    /// Latest reading, 0 when there are none
    pub current_weight: f64,
    /// `current - start`, rounded to one decimal place
    pub weight_change: f64,
    /// Date of the first reading
    pub start_date: Option<NaiveDate>,
}

impl WeightSummary {
    /// Summarize a weight series
    #[must_use]
    pub fn from_samples(samples: &[WeightSample]) -> Self {
        let samples = normalize_samples(samples);
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Self::default();
        };

        Self {
            start_weight: first.weight,
            current_weight: last.weight,
            weight_change: round_change(last.weight - first.weight),
            start_date: Some(first.date),
        }
    }
}

fn round_change(value: f64) -> f64 {
    (value * CHANGE_ROUNDING_FACTOR).round() / CHANGE_ROUNDING_FACTOR
}
