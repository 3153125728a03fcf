// ABOUTME: Integration tests for ingredient quantity scaling and fraction rendering
// ABOUTME: Covers the reference fraction table, scale factors, and to-taste passthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_core::models::{Ingredient, Quantity};
use recipe_intelligence::recipes::{render_fraction, scale, ServingPlan, FRACTION_TABLE};

fn rendered(text: &str) -> Quantity {
    Quantity::PreRendered(text.to_owned())
}

// ============================================================================
// Fraction Rendering Tests
// ============================================================================

#[test]
fn test_every_table_entry_renders_as_itself() {
    for entry in &FRACTION_TABLE {
        assert_eq!(render_fraction(entry.decimal), entry.label);
    }
}

#[test]
fn test_basic_renderings() {
    assert_eq!(render_fraction(0.5), "1/2");
    assert_eq!(render_fraction(1.5), "1 1/2");
    assert_eq!(render_fraction(0.0), "0");
    assert_eq!(render_fraction(2.0), "2");
    assert_eq!(render_fraction(2.25), "2 1/4");
    assert_eq!(render_fraction(3.0 + 2.0 / 3.0), "3 2/3");
}

#[test]
fn test_near_misses_snap_within_tolerance() {
    assert_eq!(render_fraction(0.333), "1/3");
    assert_eq!(render_fraction(1.67), "1 2/3");
    assert_eq!(render_fraction(4.005), "4");
    assert_eq!(render_fraction(0.004), "0");
}

#[test]
fn test_values_outside_tolerance_render_as_decimals() {
    assert_eq!(render_fraction(0.3), "0.3");
    assert_eq!(render_fraction(2.45), "2.45");
    assert_eq!(render_fraction(10.3), "10");
    assert_eq!(render_fraction(14.55), "15");
}

// ============================================================================
// Scaling Tests
// ============================================================================

#[test]
fn test_doubling_servings() {
    let scaled = scale(&[Ingredient::new(2.0, "cup", "flour")], 4, 8, 1);
    assert_eq!(scaled, vec![Ingredient::new(rendered("4"), "cup", "flour")]);
}

#[test]
fn test_people_times_days() {
    let scaled = scale(&[Ingredient::new(1.0, "tsp", "salt")], 4, 2, 3);
    assert_eq!(scaled[0].quantity, rendered("1 1/2"));
}

#[test]
fn test_to_taste_quantities_pass_through() {
    let ingredients = vec![
        Ingredient::to_taste("", "black pepper"),
        Ingredient::new(0.0, "pinch", "salt"),
        Ingredient::new(Quantity::PreRendered(String::new()), "", "parsley"),
    ];
    for (people, days) in [(1, 1), (6, 7), (3, 2)] {
        assert_eq!(scale(&ingredients, 4, people, days), ingredients);
    }
}

#[test]
fn test_zero_written_as_text_round_trips_unchanged() {
    let ingredients: Vec<Ingredient> =
        serde_json::from_str(r#"[{"quantity": "0", "unit": "", "item": "chili flakes"}]"#).unwrap();
    let scaled = scale(&ingredients, 2, 6, 7);
    assert_eq!(scaled, ingredients);
    let json = serde_json::to_value(&scaled).unwrap();
    assert_eq!(json[0]["quantity"], serde_json::json!("0"));
}

#[test]
fn test_numeric_strings_are_scaled_and_text_is_kept() {
    let ingredients: Vec<Ingredient> = serde_json::from_str(
        r#"[
            {"quantity": "0.5", "unit": "cup", "item": "milk"},
            {"quantity": "a handful", "unit": "", "item": "basil"}
        ]"#,
    )
    .unwrap();
    let scaled = scale(&ingredients, 2, 4, 1);
    assert_eq!(scaled[0].quantity, rendered("1"));
    assert_eq!(scaled[1].quantity, rendered("a handful"));
}

#[test]
fn test_order_units_and_items_are_preserved() {
    let ingredients = vec![
        Ingredient::new(1.0, "lb", "chicken thighs"),
        Ingredient::to_taste("", "salt"),
        Ingredient::new(0.25, "cup", "soy sauce"),
    ];
    let scaled = scale(&ingredients, 2, 3, 1);
    let items: Vec<(&str, &str)> = scaled
        .iter()
        .map(|i| (i.unit.as_str(), i.item.as_str()))
        .collect();
    assert_eq!(
        items,
        vec![("lb", "chicken thighs"), ("", "salt"), ("cup", "soy sauce")]
    );
    assert_eq!(scaled[0].quantity, rendered("1 1/2"));
    assert_eq!(scaled[2].quantity, rendered("3/8"));
}

#[test]
fn test_scaling_is_linear_within_rendering_tolerance() {
    let amounts = [0.25, 0.5, 1.0, 1.5, 2.0, 3.0];
    for servings in 1..=4_u32 {
        for people in 1..=6_u32 {
            for days in 1..=3_u32 {
                let factor = f64::from(people * days) / f64::from(servings);
                for amount in amounts {
                    let scaled = scale(&[Ingredient::new(amount, "cup", "x")], servings, people, days);
                    let expected = amount * factor;
                    let Quantity::PreRendered(text) = &scaled[0].quantity else {
                        panic!("numeric quantity should render");
                    };
                    let shown = parse_rendered(text);
                    let tolerance = if expected >= 10.0 { 0.5 } else { 0.01 };
                    assert!(
                        (shown - expected).abs() <= tolerance,
                        "{amount} x {factor} rendered {text}"
                    );
                }
            }
        }
    }
}

/// Parse "<whole> <n>/<d>", "<n>/<d>", or a decimal back into a number
fn parse_rendered(text: &str) -> f64 {
    let (whole, fraction) = match text.split_once(' ') {
        Some((whole, fraction)) => (whole.parse::<f64>().unwrap(), fraction),
        None if text.contains('/') => (0.0, text),
        None => return text.parse().unwrap(),
    };
    let (n, d) = fraction.split_once('/').unwrap();
    whole + n.parse::<f64>().unwrap() / d.parse::<f64>().unwrap()
}

#[test]
fn test_default_serving_plan_is_single_day_for_one() {
    let plan = ServingPlan::default();
    assert_eq!(plan, ServingPlan::new(1, 1));
    assert!((plan.factor_for(4) - 0.25).abs() < f64::EPSILON);
}
