// ABOUTME: Core types and constants for the recipe discovery workspace
// ABOUTME: Foundation crate with error handling, recipe data model, constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! discovery engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, filter sentinels, and questionnaire limits
//! - **models**: Recipe catalog records, ingredient quantities, preferences, ratings
//! - **formatters**: Human-readable display helpers

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Ingredient, Quantity, Preferences, `UserRating`)
pub mod models;

/// Display helpers for durations
pub mod formatters;
