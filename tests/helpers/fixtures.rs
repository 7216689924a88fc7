// ABOUTME: Canned workout and weight logs shared by the integration tests
// ABOUTME: Builds in-memory server resources pinned to a fixed reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use liftlog_server::clock::FixedClock;
use liftlog_server::config::ServerConfig;
use liftlog_server::database::{Database, MemoryStore};
use liftlog_server::models::{ExerciseSet, WeightSample};
use liftlog_server::resources::ServerResources;
use std::sync::Arc;

/// "Today" for every fixture-based test
pub fn reference_date() -> NaiveDate {
    date("2025-06-30")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Eight daily readings starting 2025-06-01
pub fn weight_samples() -> Vec<WeightSample> {
    [150.0, 151.0, 149.0, 152.0, 150.0, 153.0, 154.0, 150.0]
        .iter()
        .enumerate()
        .map(|(i, &w)| WeightSample::new(date("2025-06-01") + chrono::Duration::days(i as i64), w))
        .collect()
}

/// Bilateral set lifting `(weight, reps)`
pub fn set(
    day: &str,
    day_type: &str,
    exercise: &str,
    number: u32,
    load: (f64, u32),
) -> ExerciseSet {
    let (weight, reps) = load;
    ExerciseSet {
        date: date(day),
        day_type: Some(day_type.to_owned()),
        exercise: exercise.to_owned(),
        side: None,
        set_number: Some(number),
        weight: Some(weight),
        reps: Some(reps),
    }
}

pub fn sided(side: &str, set: ExerciseSet) -> ExerciseSet {
    ExerciseSet {
        side: Some(side.to_owned()),
        ..set
    }
}

/// Same set with no load or reps recorded
pub fn unloaded(set: ExerciseSet) -> ExerciseSet {
    ExerciseSet {
        weight: None,
        reps: None,
        ..set
    }
}

/// Bench last progressed 10 days before the reference date, Row 3 days,
/// both Lunge sides 8 days; Plank has no load or reps.
pub fn exercise_sets() -> Vec<ExerciseSet> {
    let mut sets = Vec::new();
    for n in 1..=3 {
        sets.push(set("2025-06-18", "Push", "Bench", n, (135.0, 10)));
    }
    for n in 1..=2 {
        sets.push(set("2025-06-20", "Push", "Bench", n, (140.0, 8)));
    }
    for n in 1..=2 {
        sets.push(set("2025-06-25", "Push", "Bench", n, (130.0, 8)));
    }
    for n in 1..=3 {
        sets.push(set("2025-06-27", "Pull", "Row", n, (95.0, 10)));
    }
    let lunge = set("2025-06-22", "Legs", "Lunge", 1, (40.0, 10));
    sets.push(sided("right", lunge.clone()));
    sets.push(sided("left", lunge));
    sets.push(unloaded(set("2025-06-22", "Legs", "Plank", 1, (0.0, 0))));
    sets
}

/// Distinct training dates in [`exercise_sets`]
pub const FIXTURE_TRAINING_DAYS: usize = 5;

/// Sum of weight x reps over [`exercise_sets`]
pub const FIXTURE_TOTAL_VOLUME: f64 = 12_020.0;

/// Resources over an in-memory store holding the fixtures
pub fn memory_resources() -> (Arc<ServerResources>, MemoryStore) {
    resources_with(MemoryStore::with_data(weight_samples(), exercise_sets()))
}

/// Resources over an arbitrary in-memory store
pub fn resources_with(store: MemoryStore) -> (Arc<ServerResources>, MemoryStore) {
    let resources = ServerResources::with_clock(
        Database::from(store.clone()),
        ServerConfig::default(),
        Arc::new(FixedClock(reference_date())),
    );
    (Arc::new(resources), store)
}
