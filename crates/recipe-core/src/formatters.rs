// ABOUTME: Display formatting helpers for recipe metadata
// ABOUTME: Renders cook times as compact hour/minute strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format a duration in minutes as `"1h 5m"`, `"2h"`, or `"45m"`
///
/// Negative input is clamped to zero.
#[must_use]
pub fn format_minutes(total_minutes: i64) -> String {
    let mins = total_minutes.max(0);
    let hours = mins / 60;
    let minutes = mins % 60;

    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
