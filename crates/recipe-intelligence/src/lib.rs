// ABOUTME: Recipe selection and ingredient scaling algorithms
// ABOUTME: Pure, deterministic functions over catalog records and preference values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! The two stateless components behind recipe discovery:
//!
//! - **Filter engine**: narrows a catalog by questionnaire preferences, then by
//!   search text and the filter panel.
//! - **Quantity scaler**: rescales ingredient amounts for a number of people and
//!   meal-prep days and renders them as kitchen fractions.
//!
//! Neither component performs I/O or holds state, so both may be called from any
//! number of places without coordination.

/// Recipe filtering and ingredient scaling
pub mod recipes;

pub use recipes::{
    all_cuisines, apply_active_filters, render_fraction, scale, scale_factor,
    select_by_preferences,
};
