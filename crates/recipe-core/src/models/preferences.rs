// ABOUTME: User preference and transient filter models consumed by the filter engine
// ABOUTME: Preferences come from the questionnaire; ActiveFilters from the filter panel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

use super::recipe::{Difficulty, MealType};
use crate::constants::filters::UNBOUNDED_COOK_TIME;

/// Optional choice where absent, blank, or unrecognised text means "any"
fn wildcard_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse() {
        Ok(choice) => Ok(Some(choice)),
        Err(e) => {
            warn!(value = text, "treating unrecognised choice as any: {e}");
            Ok(None)
        }
    }
}

/// Questionnaire answers
///
/// Every empty or unset field is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Acceptable cuisines; a recipe matches when it shares at least one
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Required difficulty
    #[serde(default, deserialize_with = "wildcard_choice")]
    pub difficulty: Option<Difficulty>,
    /// Required meal
    #[serde(default, deserialize_with = "wildcard_choice")]
    pub meal_type: Option<MealType>,
    /// Required meal-prep duration in days
    #[serde(default)]
    pub meal_prep_duration: Option<u32>,
    /// Dietary labels; a recipe matches when it carries at least one
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl Preferences {
    /// Preferences that match every recipe
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Add an acceptable cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.push(cuisine.into());
        self
    }

    /// Require a difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Require a meal type
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Require a meal-prep duration
    #[must_use]
    pub const fn with_meal_prep_duration(mut self, days: u32) -> Self {
        self.meal_prep_duration = Some(days);
        self
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_dietary_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.push(restriction.into());
        self
    }
}

/// Refinements from the filter panel, applied on top of preference selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilters {
    /// Required difficulty; `None`, an empty string, or an unknown name matches all
    #[serde(default, deserialize_with = "wildcard_choice")]
    pub difficulty: Option<Difficulty>,
    /// Required cuisine; `None` or an empty string matches all
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Inclusive upper bound on cook time in minutes
    #[serde(default = "default_max_cook_time", alias = "maxTime")]
    pub max_cook_time: u32,
}

const fn default_max_cook_time() -> u32 {
    UNBOUNDED_COOK_TIME
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            difficulty: None,
            cuisine: None,
            max_cook_time: UNBOUNDED_COOK_TIME,
        }
    }
}

impl ActiveFilters {
    /// Require a difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Require a cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Bound the cook time
    #[must_use]
    pub const fn with_max_cook_time(mut self, minutes: u32) -> Self {
        self.max_cook_time = minutes;
        self
    }

    /// Cuisine constraint, treating an empty string as unset
    #[must_use]
    pub fn cuisine_constraint(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|c| !c.is_empty())
    }
}
