// ABOUTME: Shared benchmark utilities for the analytics benchmarks
// ABOUTME: Exposes deterministic workout and weight log generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities.

pub mod fixtures;
