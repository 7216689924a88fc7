// ABOUTME: Staleness ranker reducing flagged sessions to days-since-progress per identity
// ABOUTME: Also selects the single most-stale identity with a fixed tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Staleness ranking
//!
//! `reference_date` is supplied by the caller so results are reproducible.
//!
//! Table order: `day_type` ascending (missing last), then
//! `days_since_progress` descending (missing last), then identity order.
//!
//! Most-stale selection: largest `days_since_progress`; identities without a
//! progress date never win; ties go to the smallest identity (exercise name
//! ascending, then side with no side first).

use crate::progress::FlaggedSession;
use chrono::NaiveDate;
use liftlog_core::models::ExerciseIdentity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Progress recency for one exercise identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalenessRecord {
    /// Exercise name
    pub exercise: String,
    /// Laterality tag
    pub side: Option<String>,
    /// Dashboard label
    pub exercise_label: String,
    /// `day_type` of the identity's most recent session
    pub day_type: Option<String>,
    /// Latest session that was flagged as progress
    pub last_progress_date: Option<NaiveDate>,
    /// Sessions recorded for the identity, progress or not
    pub total_sessions: u32,
    /// `reference_date - last_progress_date`, never negative
    pub days_since_progress: Option<i64>,
}

impl StalenessRecord {
    /// Grouping key of this record
    #[must_use]
    pub fn identity(&self) -> ExerciseIdentity {
        ExerciseIdentity::new(self.exercise.clone(), self.side.clone())
    }
}

/// The identity that has gone longest without progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostStale {
    /// Identity selected
    pub identity: ExerciseIdentity,
    /// Dashboard label
    pub exercise_label: String,
    /// Days since its last progress
    pub days_since_progress: i64,
}

/// Output of the ranker: the ordered table plus the global selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalenessReport {
    /// One record per identity in table order
    pub records: Vec<StalenessRecord>,
    /// Absent when no identity has a progress date
    pub most_stale: Option<MostStale>,
}

#[derive(Default)]
struct IdentityAccumulator {
    last_progress_date: Option<NaiveDate>,
    latest_date: Option<NaiveDate>,
    day_type: Option<String>,
    total_sessions: u32,
}

/// Rank identities by days since their last progress-flagged session
#[must_use]
pub fn rank_staleness(flagged: &[FlaggedSession], reference_date: NaiveDate) -> StalenessReport {
    let mut by_identity: BTreeMap<ExerciseIdentity, IdentityAccumulator> = BTreeMap::new();
    for entry in flagged {
        let session = &entry.session;
        let acc = by_identity.entry(session.identity()).or_default();
        acc.total_sessions = acc.total_sessions.saturating_add(1);
        if entry.made_progress {
            acc.last_progress_date = acc.last_progress_date.max(Some(session.date));
        }
        if acc.latest_date.is_none_or(|latest| session.date > latest) {
            acc.latest_date = Some(session.date);
            acc.day_type.clone_from(&session.day_type);
        }
    }

    // BTreeMap iteration is identity order, so records start out tie-break sorted
    let mut records: Vec<StalenessRecord> = by_identity
        .into_iter()
        .map(|(identity, acc)| StalenessRecord {
            exercise_label: identity.label(),
            days_since_progress: acc
                .last_progress_date
                .map(|date| days_between(date, reference_date)),
            exercise: identity.exercise,
            side: identity.side,
            day_type: acc.day_type,
            last_progress_date: acc.last_progress_date,
            total_sessions: acc.total_sessions,
        })
        .collect();

    let most_stale = select_most_stale(&records);

    records.sort_by(|a, b| {
        cmp_nulls_last(a.day_type.as_ref(), b.day_type.as_ref(), Ord::cmp)
            .then_with(|| {
                cmp_nulls_last(a.days_since_progress, b.days_since_progress, descending)
            })
            .then_with(|| a.exercise.cmp(&b.exercise))
            .then_with(|| a.side.cmp(&b.side))
    });

    debug!(
        identities = records.len(),
        most_stale = ?most_stale.as_ref().map(|m| &m.exercise_label),
        %reference_date,
        "Ranked exercise staleness"
    );

    StalenessReport {
        records,
        most_stale,
    }
}

/// First strict maximum over records in identity order
fn select_most_stale(records: &[StalenessRecord]) -> Option<MostStale> {
    let mut best: Option<(&StalenessRecord, i64)> = None;
    for record in records {
        let Some(days) = record.days_since_progress else {
            continue;
        };
        if best.is_none_or(|(_, best_days)| days > best_days) {
            best = Some((record, days));
        }
    }

    best.map(|(record, days)| MostStale {
        identity: record.identity(),
        exercise_label: record.exercise_label.clone(),
        days_since_progress: days,
    })
}

/// Whole days from `from` to `to`, floored at zero for future-dated logs
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}

fn cmp_nulls_last<T>(a: Option<T>, b: Option<T>, f: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => f(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}
