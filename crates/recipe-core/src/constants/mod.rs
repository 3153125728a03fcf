// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, filter sentinels, gesture thresholds, and questionnaire limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Keys under which the persisted state is stored
pub mod storage_keys {
    /// Ordered list of bookmarked recipe ids
    pub const BOOKMARKS: &str = "recipe-bookmarks";
    /// Append-only rating event log
    pub const RATINGS: &str = "recipe-ratings";
}

/// Active filter defaults
pub mod filters {
    /// Max cook time meaning "any". Still compared literally as an upper bound.
    pub const UNBOUNDED_COOK_TIME: u32 = 999;
}

/// Quantity scaling constants
pub mod scaling {
    /// Maximum distance between a remainder and a table fraction for the fraction to be used
    pub const FRACTION_TOLERANCE: f64 = 0.01;
    /// Values at or above this render as whole numbers when no fraction matches
    pub const DECIMAL_RENDER_CEILING: f64 = 10.0;
}

/// Card deck interaction constants
pub mod gestures {
    /// Horizontal drag distance (px) that must be exceeded to count as a swipe
    pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
}

/// Questionnaire bounds
pub mod questionnaire {
    /// Minimum number of people cooked for
    pub const MIN_PEOPLE: u32 = 1;
    /// Maximum number of people cooked for
    pub const MAX_PEOPLE: u32 = 6;
    /// Minimum meal-prep duration in days
    pub const MIN_PREP_DAYS: u32 = 1;
    /// Maximum meal-prep duration in days
    pub const MAX_PREP_DAYS: u32 = 7;
}

/// Rating bounds
pub mod ratings {
    /// Lowest rating a user can give
    pub const MIN_USER_RATING: u8 = 1;
    /// Highest rating a user can give
    pub const MAX_USER_RATING: u8 = 5;
    /// Upper bound of a catalog rating
    pub const MAX_CATALOG_RATING: f64 = 5.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const RECIPE_DISCOVERY: &str = "recipe-discovery";
}
