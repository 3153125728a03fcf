// ABOUTME: Renders decimal ingredient amounts as kitchen fractions ("1 1/2", "3/4")
// ABOUTME: Nearest-match lookup over sixteen reference fractions with a fixed tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::scaling::{DECIMAL_RENDER_CEILING, FRACTION_TOLERANCE};

/// A fraction a cook can measure, with its decimal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFraction {
    /// Decimal value of the fraction
    pub decimal: f64,
    /// Display form ("0" for the zero entry)
    pub label: &'static str,
}

impl ReferenceFraction {
    const fn new(decimal: f64, label: &'static str) -> Self {
        Self { decimal, label }
    }

    /// Whether this is the zero entry
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.decimal.abs() < f64::EPSILON
    }
}

/// Reference fractions over denominators 2, 3, 4, 5, 6, and 8, strictly increasing
pub const FRACTION_TABLE: [ReferenceFraction; 16] = [
    ReferenceFraction::new(0.0, "0"),
    ReferenceFraction::new(1.0 / 8.0, "1/8"),
    ReferenceFraction::new(1.0 / 6.0, "1/6"),
    ReferenceFraction::new(1.0 / 5.0, "1/5"),
    ReferenceFraction::new(1.0 / 4.0, "1/4"),
    ReferenceFraction::new(1.0 / 3.0, "1/3"),
    ReferenceFraction::new(3.0 / 8.0, "3/8"),
    ReferenceFraction::new(2.0 / 5.0, "2/5"),
    ReferenceFraction::new(1.0 / 2.0, "1/2"),
    ReferenceFraction::new(3.0 / 5.0, "3/5"),
    ReferenceFraction::new(5.0 / 8.0, "5/8"),
    ReferenceFraction::new(2.0 / 3.0, "2/3"),
    ReferenceFraction::new(3.0 / 4.0, "3/4"),
    ReferenceFraction::new(4.0 / 5.0, "4/5"),
    ReferenceFraction::new(5.0 / 6.0, "5/6"),
    ReferenceFraction::new(7.0 / 8.0, "7/8"),
];

/// Closest table entry to `remainder`, if within tolerance
///
/// The first entry with the smallest difference wins.
fn closest_fraction(remainder: f64) -> Option<&'static ReferenceFraction> {
    let mut best: Option<(&'static ReferenceFraction, f64)> = None;
    for entry in &FRACTION_TABLE {
        let diff = (remainder - entry.decimal).abs();
        if best.is_none_or(|(_, best_diff)| diff < best_diff) {
            best = Some((entry, diff));
        }
    }
    best.filter(|(_, diff)| *diff < FRACTION_TOLERANCE)
        .map(|(entry, _)| entry)
}

/// Decimal rendering used when no fraction is close enough
///
/// Below 10 the value keeps up to two decimals with trailing zeros removed;
/// from 10 up it is rounded to a whole number.
fn render_decimal(value: f64) -> String {
    if value < DECIMAL_RENDER_CEILING {
        let fixed = format!("{value:.2}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            fixed
        }
    } else {
        format!("{}", value.round())
    }
}

/// Render a decimal amount as a whole number, a fraction, or both
///
/// ```rust
/// use recipe_intelligence::recipes::render_fraction;
///
/// assert_eq!(render_fraction(0.5), "1/2");
/// assert_eq!(render_fraction(1.5), "1 1/2");
/// assert_eq!(render_fraction(0.0), "0");
/// assert_eq!(render_fraction(2.0), "2");
/// assert_eq!(render_fraction(2.3), "2.3");
/// ```
#[must_use]
pub fn render_fraction(value: f64) -> String {
    let whole = value.floor();
    let remainder = value - whole;

    let Some(fraction) = closest_fraction(remainder) else {
        return render_decimal(value);
    };

    let whole_is_zero = whole.abs() < f64::EPSILON;
    match (whole_is_zero, fraction.is_zero()) {
        (true, true) => "0".to_owned(),
        (true, false) => fraction.label.to_owned(),
        (false, true) => format!("{whole}"),
        (false, false) => format!("{whole} {}", fraction.label),
    }
}
