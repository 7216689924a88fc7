// ABOUTME: Progress classifier comparing each session to its immediate predecessor
// ABOUTME: A session counts as progress if weight, reps, or sets strictly increased
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress classification
//!
//! Sessions are partitioned by exercise identity and ordered by date inside
//! each partition. Every session is compared with the one directly before it,
//! never with the historical best, so a lighter day followed by a return to
//! the old load counts as progress again.

use liftlog_core::models::WorkoutSession;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A session together with its progress flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedSession {
    /// The aggregated session
    #[serde(flatten)]
    pub session: WorkoutSession,
    /// First session for the identity, or improved on its predecessor
    pub made_progress: bool,
}

/// Flag every session; output keeps the input order
#[must_use]
pub fn classify_progress(sessions: &[WorkoutSession]) -> Vec<FlaggedSession> {
    let mut order: Vec<usize> = (0..sessions.len()).collect();
    order.sort_by(|&a, &b| {
        let (x, y) = (&sessions[a], &sessions[b]);
        x.exercise
            .cmp(&y.exercise)
            .then_with(|| x.side.cmp(&y.side))
            .then_with(|| x.date.cmp(&y.date))
    });

    let mut flags = vec![true; sessions.len()];
    for pair in order.windows(2) {
        let (prev, current) = (&sessions[pair[0]], &sessions[pair[1]]);
        if !current.same_identity(prev) {
            continue;
        }
        if current.date == prev.date {
            warn!(
                date = %current.date,
                exercise = %current.exercise,
                side = ?current.side,
                "Duplicate session for identity on one date, comparing in input order"
            );
        }
        flags[pair[1]] = improves_on(current, prev);
    }

    sessions
        .iter()
        .zip(flags)
        .map(|(session, made_progress)| FlaggedSession {
            session: session.clone(),
            made_progress,
        })
        .collect()
}

/// Disjunction over the three tracked metrics
#[must_use]
pub fn improves_on(current: &WorkoutSession, previous: &WorkoutSession) -> bool {
    increased(current.max_weight, previous.max_weight)
        || increased(current.total_reps, previous.total_reps)
        || current.sets_completed > previous.sets_completed
}

/// Strictly greater; a null on either side means there is nothing to compare against
fn increased<T: PartialOrd>(current: Option<T>, previous: Option<T>) -> bool {
    match (current, previous) {
        (Some(current), Some(previous)) => current > previous,
        _ => true,
    }
}
