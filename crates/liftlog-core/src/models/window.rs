// ABOUTME: Inclusive calendar-date window used to restrict analytics input
// ABOUTME: An unbounded window (the default) covers all history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range; `None` on either side leaves that side open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date included
    pub from: Option<NaiveDate>,
    /// Last date included
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    /// Window covering all history
    #[must_use]
    pub const fn all() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Window with explicit bounds
    #[must_use]
    pub const fn between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// True when neither bound is set
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let window = DateWindow::all();
        assert!(window.is_unbounded());
        assert!(window.contains(day(1)));
        assert!(window.contains(day(31)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = DateWindow::between(Some(day(5)), Some(day(10)));
        assert!(!window.contains(day(4)));
        assert!(window.contains(day(5)));
        assert!(window.contains(day(10)));
        assert!(!window.contains(day(11)));
    }

    #[test]
    fn test_half_open_window() {
        let window = DateWindow::between(None, Some(day(3)));
        assert!(window.contains(day(1)));
        assert!(!window.contains(day(4)));
    }
}
