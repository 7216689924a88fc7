// ABOUTME: Criterion benchmarks for the workout analytics pipeline
// ABOUTME: Measures session aggregation, progress flags, staleness ranking, and weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analytics pipeline.
//!
//! Each stage runs over a month, a year, and several years of generated
//! training history so regressions in the sort-heavy stages show up early.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Duration;
use common::fixtures::{generate_sets, generate_weights, start_date, LogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlog_server::intelligence::{
    aggregate_sessions, classify_progress, rank_staleness, weight_trend, WeightSummary,
};
use liftlog_server::models::DateWindow;

const SIZES: [LogSize; 3] = [LogSize::Month, LogSize::Year, LogSize::Archive];

fn bench_session_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_aggregation");

    for size in SIZES {
        let sets = generate_sets(size);
        group.throughput(Throughput::Elements(sets.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate_sessions", size.days()),
            &sets,
            |b, sets| b.iter(|| aggregate_sessions(black_box(sets), &DateWindow::all())),
        );
    }

    // Windowed query over the last 30 days of a long history
    let archive = generate_sets(LogSize::Archive);
    let from = start_date() + Duration::days(1470);
    let window = DateWindow::between(Some(from), None);
    group.bench_function("aggregate_sessions_last_30_days", |b| {
        b.iter(|| aggregate_sessions(black_box(&archive), black_box(&window)));
    });

    group.finish();
}

fn bench_progress_and_staleness(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_staleness");

    for size in SIZES {
        let sessions = aggregate_sessions(&generate_sets(size), &DateWindow::all());
        let reference = start_date() + Duration::days(1600);
        group.throughput(Throughput::Elements(sessions.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("classify_progress", size.days()),
            &sessions,
            |b, sessions| b.iter(|| classify_progress(black_box(sessions))),
        );

        let flagged = classify_progress(&sessions);
        group.bench_with_input(
            BenchmarkId::new("rank_staleness", size.days()),
            &flagged,
            |b, flagged| b.iter(|| rank_staleness(black_box(flagged), black_box(reference))),
        );
    }

    group.finish();
}

fn bench_weight_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_trend");

    for size in SIZES {
        let samples = generate_weights(size);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("rolling_7day_avg", size.days()),
            &samples,
            |b, samples| b.iter(|| weight_trend(black_box(samples))),
        );
        group.bench_with_input(
            BenchmarkId::new("summary", size.days()),
            &samples,
            |b, samples| b.iter(|| WeightSummary::from_samples(black_box(samples))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_session_aggregation,
    bench_progress_and_staleness,
    bench_weight_trend
);
criterion_main!(benches);
