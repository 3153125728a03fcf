// ABOUTME: Main library entry point for the recipe discovery application
// ABOUTME: Wires catalog loading, persistence, and the discovery deck around the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Discovery
//!
//! Browse a recipe catalog narrowed by questionnaire answers, refine it with
//! search and filters, bookmark and rate recipes, and scale ingredient lists
//! for a number of people and meal-prep days.
//!
//! ## Architecture
//!
//! - **`recipe-core`**: data model, errors, constants, formatters
//! - **`recipe-intelligence`**: filter engine and quantity scaler (pure functions)
//! - **this crate**: configuration, logging, catalog, storage, bookmarks,
//!   ratings, the discovery session, and the `recipe-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_discovery::catalog::Catalog;
//! use recipe_discovery::discovery::DiscoverySession;
//! use recipe_discovery::errors::AppResult;
//! use recipe_discovery::models::Preferences;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = Catalog::builtin()?;
//!     let prefs = Preferences::any().with_cuisine("Italian");
//!     let mut session = DiscoverySession::new(catalog.recipes(), &prefs);
//!     session.set_max_cook_time(45);
//!     if let Some(recipe) = session.current() {
//!         println!("{}", recipe.title);
//!     }
//!     Ok(())
//! }
//! ```

/// Bookmark set and repository
pub mod bookmarks;

/// Recipe catalog loading and validation
pub mod catalog;

/// Environment configuration
pub mod config;

/// Discovery deck session and swipe handling
pub mod discovery;

/// Structured logging setup
pub mod logging;

/// Rating log repository
pub mod ratings;

/// Key-value persistence backends
pub mod storage;

pub use recipe_core::{constants, errors, formatters, models};
pub use recipe_intelligence::recipes;
