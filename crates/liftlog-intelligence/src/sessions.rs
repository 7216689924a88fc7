// ABOUTME: Session aggregator grouping raw sets into per-day, per-exercise sessions
// ABOUTME: Computes max weight, total reps, sets completed, and total volume per group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session aggregation
//!
//! Sets are sorted by `(date, exercise, side, set_number)` and then
//! partitioned into runs sharing `(date, exercise, side)`. The sort is
//! stable, so when two sets of a group carry the same set number their input
//! order is kept, and the group's `day_type` is taken from its first set.

use liftlog_core::models::{DateWindow, ExerciseSet, WorkoutSession};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// Aggregate sets inside `window` into sessions
///
/// Output is ordered by date, then exercise, then side (`None` first), which
/// is the order the progress classifier relies on.
#[must_use]
pub fn aggregate_sessions(sets: &[ExerciseSet], window: &DateWindow) -> Vec<WorkoutSession> {
    let mut in_window: Vec<&ExerciseSet> =
        sets.iter().filter(|s| window.contains(s.date)).collect();
    in_window.sort_by(|a, b| compare_sets(a, b));

    let mut sessions: Vec<WorkoutSession> = Vec::new();
    for set in in_window {
        match sessions.last_mut() {
            Some(session) if belongs_to(session, set) => {
                if session.day_type != set.day_type && set.day_type.is_some() {
                    debug!(
                        date = %set.date,
                        exercise = %set.exercise,
                        kept = ?session.day_type,
                        ignored = ?set.day_type,
                        "Conflicting day_type within session, keeping lowest-numbered set's value"
                    );
                }
                absorb(session, set);
            }
            _ => sessions.push(start_session(set)),
        }
    }

    debug!(
        sets = sets.len(),
        sessions = sessions.len(),
        "Aggregated workout sessions"
    );
    sessions
}

fn compare_sets(a: &ExerciseSet, b: &ExerciseSet) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.exercise.cmp(&b.exercise))
        .then_with(|| a.side.cmp(&b.side))
        .then_with(|| set_rank(a).cmp(&set_rank(b)))
}

/// Numbered sets first, ascending; unnumbered sets after
const fn set_rank(set: &ExerciseSet) -> (bool, Option<u32>) {
    (set.set_number.is_none(), set.set_number)
}

fn belongs_to(session: &WorkoutSession, set: &ExerciseSet) -> bool {
    session.date == set.date && session.exercise == set.exercise && session.side == set.side
}

fn start_session(set: &ExerciseSet) -> WorkoutSession {
    WorkoutSession {
        date: set.date,
        day_type: set.day_type.clone(),
        exercise: set.exercise.clone(),
        side: set.side.clone(),
        max_weight: set.weight,
        total_reps: set.reps,
        sets_completed: 1,
        total_volume: set.volume(),
    }
}

fn absorb(session: &mut WorkoutSession, set: &ExerciseSet) {
    session.max_weight = merge(session.max_weight, set.weight, f64::max);
    session.total_reps = merge(session.total_reps, set.reps, u32::saturating_add);
    session.sets_completed = session.sets_completed.saturating_add(1);
    session.total_volume = merge(session.total_volume, set.volume(), |a, b| a + b);
}

/// SQL-style aggregate step: nulls are skipped, all-null stays null
fn merge<T>(acc: Option<T>, value: Option<T>, combine: impl FnOnce(T, T) -> T) -> Option<T> {
    match (acc, value) {
        (Some(a), Some(b)) => Some(combine(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Whole-history training totals shown on the dashboard summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTotals {
    /// Distinct training days
    pub total_sessions: usize,
    /// Sum of session volume, nulls counted as zero
    pub total_volume: f64,
}

impl SessionTotals {
    /// Reduce a session list to its totals
    #[must_use]
    pub fn from_sessions(sessions: &[WorkoutSession]) -> Self {
        let days: BTreeSet<_> = sessions.iter().map(|s| s.date).collect();
        Self {
            total_sessions: days.len(),
            total_volume: sessions.iter().filter_map(|s| s.total_volume).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn set(
        date: NaiveDate,
        exercise: &str,
        side: Option<&str>,
        number: Option<u32>,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> ExerciseSet {
        ExerciseSet {
            date,
            day_type: Some("Push".to_owned()),
            exercise: exercise.to_owned(),
            side: side.map(str::to_owned),
            set_number: number,
            weight,
            reps,
        }
    }

    #[test]
    fn test_empty_input_yields_no_sessions() {
        assert!(aggregate_sessions(&[], &DateWindow::all()).is_empty());
    }

    #[test]
    fn test_group_totals() {
        let sets = vec![
            set(day(1), "Bench", None, Some(1), Some(135.0), Some(10)),
            set(day(1), "Bench", None, Some(2), Some(155.0), Some(8)),
            set(day(1), "Bench", None, Some(3), Some(155.0), Some(6)),
        ];
        let sessions = aggregate_sessions(&sets, &DateWindow::all());

        assert_eq!(sessions.len(), 1);
        let session = &sessions[0];
        assert_eq!(session.max_weight, Some(155.0));
        assert_eq!(session.total_reps, Some(24));
        assert_eq!(session.sets_completed, 3);
        assert_eq!(session.total_volume, Some(1350.0 + 1240.0 + 930.0));
    }

    #[test]
    fn test_sides_are_separate_sessions_and_sorted() {
        let sets = vec![
            set(day(2), "Lunge", Some("right"), None, Some(40.0), Some(10)),
            set(day(1), "Squat", None, Some(1), Some(185.0), Some(5)),
            set(day(2), "Lunge", Some("left"), Some(1), Some(40.0), Some(10)),
            set(day(2), "Lunge", None, Some(1), Some(20.0), Some(12)),
        ];
        let sessions = aggregate_sessions(&sets, &DateWindow::all());

        let keys: Vec<_> = sessions
            .iter()
            .map(|s| (s.date, s.exercise.as_str(), s.side.as_deref()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (day(1), "Squat", None),
                (day(2), "Lunge", None),
                (day(2), "Lunge", Some("left")),
                (day(2), "Lunge", Some("right")),
            ]
        );
    }

    #[test]
    fn test_null_metrics_are_skipped_not_zeroed() {
        let sets = vec![
            set(day(1), "Plank", None, Some(1), None, None),
            set(day(1), "Plank", None, Some(2), None, Some(1)),
        ];
        let sessions = aggregate_sessions(&sets, &DateWindow::all());

        assert_eq!(sessions[0].max_weight, None);
        assert_eq!(sessions[0].total_reps, Some(1));
        assert_eq!(sessions[0].total_volume, None);
        assert_eq!(sessions[0].sets_completed, 2);
    }

    #[test]
    fn test_day_type_from_lowest_numbered_set() {
        let mut late = set(day(1), "Row", None, Some(2), Some(95.0), Some(10));
        late.day_type = Some("Pull".to_owned());
        let mut early = set(day(1), "Row", None, Some(1), Some(95.0), Some(10));
        early.day_type = Some("Back".to_owned());
        let mut unnumbered = set(day(1), "Row", None, None, Some(95.0), Some(10));
        unnumbered.day_type = Some("Misc".to_owned());

        let sessions = aggregate_sessions(&[unnumbered, late, early], &DateWindow::all());
        assert_eq!(sessions[0].day_type.as_deref(), Some("Back"));
    }

    #[test]
    fn test_window_filters_sets() {
        let sets = vec![
            set(day(1), "Squat", None, Some(1), Some(185.0), Some(5)),
            set(day(5), "Squat", None, Some(1), Some(190.0), Some(5)),
            set(day(9), "Squat", None, Some(1), Some(195.0), Some(5)),
        ];
        let window = DateWindow::between(Some(day(2)), Some(day(9)));
        let sessions = aggregate_sessions(&sets, &window);

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].date, day(5));
    }

    #[test]
    fn test_session_totals_count_distinct_days() {
        let sets = vec![
            set(day(1), "Squat", None, Some(1), Some(100.0), Some(5)),
            set(day(1), "Bench", None, Some(1), Some(50.0), Some(10)),
            set(day(3), "Squat", None, Some(1), Some(100.0), Some(5)),
            set(day(3), "Plank", None, Some(1), None, None),
        ];
        let totals = SessionTotals::from_sessions(&aggregate_sessions(&sets, &DateWindow::all()));

        assert_eq!(totals.total_sessions, 2);
        assert!((totals.total_volume - 1500.0).abs() < f64::EPSILON);
    }
}
