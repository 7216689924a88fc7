// ABOUTME: CSV ingestion of the workout and weight logs into the analytics store
// ABOUTME: Skips malformed rows with a warning and reports per-file load counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSV loader
//!
//! `workout_log.csv` columns: `date,day_type,exercise,side,set_number,weight_lbs,reps`.
//! `weight_log.csv` columns: `date,weight_lbs`. Empty cells are nulls. Each
//! table is replaced as a whole inside one transaction.

use crate::database::AnalyticsStore;
use chrono::NaiveDate;
use liftlog_core::constants::defaults;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{ExerciseSet, WeightSample};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of reading one CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// File or stream the rows came from
    pub source: String,
    /// Data rows seen, excluding the header
    pub rows_read: usize,
    /// Rows that parsed and were written
    pub rows_loaded: usize,
    /// Rows dropped as malformed
    pub rows_skipped: usize,
}

impl LoadReport {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            ..Self::default()
        }
    }

    fn skip(&mut self, line: usize, reason: &str) {
        self.rows_skipped += 1;
        warn!(source = %self.source, line, reason, "Skipping malformed CSV row");
    }
}

/// Reports for both tables after a directory load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// `workout_log.csv`
    pub workout_log: LoadReport,
    /// `weight_log.csv`
    pub weight_log: LoadReport,
}

#[derive(Deserialize)]
struct WorkoutLogRecord {
    date: NaiveDate,
    day_type: Option<String>,
    exercise: Option<String>,
    side: Option<String>,
    set_number: Option<u32>,
    weight_lbs: Option<f64>,
    reps: Option<u32>,
}

#[derive(Deserialize)]
struct WeightLogRecord {
    date: NaiveDate,
    weight_lbs: Option<f64>,
}

fn csv_error(source: &str, e: &csv::Error) -> AppError {
    let error = match e.kind() {
        csv::ErrorKind::Io(_) => AppError::storage(format!("Failed to read {source}: {e}")),
        _ => AppError::invalid_format(format!("Malformed CSV in {source}: {e}")),
    };
    error.with_resource_id(source)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// 1-based file line of a data record (header is line 1)
const fn line_of(index: usize) -> usize {
    index + 2
}

/// Parse workout rows; a row needs a date and a non-empty exercise
///
/// # Errors
///
/// Returns an error only when the header cannot be read; bad rows are skipped
pub fn parse_exercise_sets<R: Read>(
    reader: R,
    source: &str,
) -> AppResult<(Vec<ExerciseSet>, LoadReport)> {
    let mut csv = csv_reader(reader);
    csv.headers().map_err(|e| csv_error(source, &e))?;

    let mut report = LoadReport::new(source);
    let mut sets = Vec::new();
    for (index, record) in csv.deserialize::<WorkoutLogRecord>().enumerate() {
        report.rows_read += 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                report.skip(line_of(index), &e.to_string());
                continue;
            }
        };
        let Some(exercise) = record.exercise else {
            report.skip(line_of(index), "missing exercise");
            continue;
        };
        sets.push(ExerciseSet {
            date: record.date,
            day_type: record.day_type,
            exercise,
            side: record.side,
            set_number: record.set_number,
            weight: record.weight_lbs,
            reps: record.reps,
        });
    }
    report.rows_loaded = sets.len();
    Ok((sets, report))
}

/// Parse weight rows; a row needs a date and a weight
///
/// # Errors
///
/// Returns an error only when the header cannot be read; bad rows are skipped
pub fn parse_weight_samples<R: Read>(
    reader: R,
    source: &str,
) -> AppResult<(Vec<WeightSample>, LoadReport)> {
    let mut csv = csv_reader(reader);
    csv.headers().map_err(|e| csv_error(source, &e))?;

    let mut report = LoadReport::new(source);
    let mut samples = Vec::new();
    for (index, record) in csv.deserialize::<WeightLogRecord>().enumerate() {
        report.rows_read += 1;
        match record {
            Ok(WeightLogRecord {
                date,
                weight_lbs: Some(weight),
            }) => samples.push(WeightSample::new(date, weight)),
            Ok(_) => report.skip(line_of(index), "missing weight_lbs"),
            Err(e) => report.skip(line_of(index), &e.to_string()),
        }
    }
    report.rows_loaded = samples.len();
    Ok((samples, report))
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("CSV file {}", path.display()))
        } else {
            AppError::storage(format!("Failed to open {}: {e}", path.display()))
                .with_source(e)
        }
    })
}

/// Load `workout_log.csv` and `weight_log.csv` from `dir`, replacing both tables
///
/// Both files are parsed before anything is written, so a missing file leaves
/// the store untouched.
///
/// # Errors
///
/// Returns an error if a file is missing or unreadable, or the store write fails
pub async fn load_directory<S: AnalyticsStore + ?Sized>(
    store: &S,
    dir: &Path,
) -> AppResult<IngestReport> {
    let workout_path = dir.join(defaults::WORKOUT_LOG_FILE);
    let weight_path = dir.join(defaults::WEIGHT_LOG_FILE);

    let (sets, mut workout_report) =
        parse_exercise_sets(open(&workout_path)?, &workout_path.display().to_string())?;
    let (samples, mut weight_report) =
        parse_weight_samples(open(&weight_path)?, &weight_path.display().to_string())?;

    workout_report.rows_loaded = store.replace_exercise_sets(&sets).await?;
    info!(
        source = %workout_report.source,
        loaded = workout_report.rows_loaded,
        skipped = workout_report.rows_skipped,
        "Loaded workout_log"
    );

    weight_report.rows_loaded = store.replace_weight_samples(&samples).await?;
    info!(
        source = %weight_report.source,
        loaded = weight_report.rows_loaded,
        skipped = weight_report.rows_skipped,
        "Loaded weight_log"
    );

    Ok(IngestReport {
        workout_log: workout_report,
        weight_log: weight_report,
    })
}
