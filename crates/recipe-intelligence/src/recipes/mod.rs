// ABOUTME: Recipe discovery algorithms: preference selection, active filters, and scaling
// ABOUTME: Re-exports the filter engine, quantity scaler, and fraction renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! ## Filter engine
//!
//! Selection happens in two stages. [`select_by_preferences`] runs once per
//! completed questionnaire; [`apply_active_filters`] runs every time the search
//! text or the filter panel changes. Both keep catalog order.
//!
//! ## Quantity scaler
//!
//! [`scale`] multiplies every numeric ingredient amount by
//! `people * days / servings` and renders the result with [`render_fraction`].
//!
//! ```rust
//! use recipe_core::models::Ingredient;
//! use recipe_intelligence::recipes::{render_fraction, scale};
//!
//! let scaled = scale(&[Ingredient::new(1.0, "tsp", "salt")], 4, 2, 3);
//! assert_eq!(scaled[0].quantity.to_string(), "1 1/2");
//! assert_eq!(render_fraction(0.75), "3/4");
//! ```

/// Preference and active-filter predicates
pub mod filter;
/// Decimal to kitchen-fraction rendering
pub mod fraction;
/// Ingredient quantity scaling
pub mod scaling;

pub use filter::{
    all_cuisines, apply_active_filters, matches_active_filters, matches_preferences,
    matches_search, select_by_preferences,
};
pub use fraction::{render_fraction, ReferenceFraction, FRACTION_TABLE};
pub use scaling::{scale, scale_factor, scale_quantity, ServingPlan};
