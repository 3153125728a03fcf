// ABOUTME: Swipe gesture classification for the recipe card deck
// ABOUTME: Maps a horizontal drag to left/right once it passes the threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::gestures::SWIPE_THRESHOLD_PX;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Direction of a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Skip
    Left,
    /// Bookmark
    Right,
}

impl SwipeDirection {
    /// Classify a drag from `start_x` to `end_x`
    ///
    /// Returns `None` unless the drag is longer than the threshold. Dragging
    /// towards smaller x (positive `start_x - end_x`) is a left swipe.
    #[must_use]
    pub fn from_drag(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if diff > 0.0 { Self::Left } else { Self::Right })
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(AppError::invalid_input(format!(
                "unknown swipe direction '{other}' (expected left or right)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(SwipeDirection::from_drag(100.0, 50.0), None);
        assert_eq!(SwipeDirection::from_drag(100.0, 150.0), None);
        assert_eq!(SwipeDirection::from_drag(100.0, 49.5), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::from_drag(100.0, 150.5), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_parse() {
        assert_eq!("right".parse::<SwipeDirection>().unwrap(), SwipeDirection::Right);
        assert!("up".parse::<SwipeDirection>().is_err());
    }
}
