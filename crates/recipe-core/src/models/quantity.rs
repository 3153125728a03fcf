// ABOUTME: Ingredient quantity model distinguishing numeric, pre-rendered, and unspecified amounts
// ABOUTME: Accepts the loose JSON shapes found in recipe data (number, string, null)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of an ingredient as stored in recipe data
///
/// Recipe data stores quantities as numbers, as numeric strings, as strings that
/// were already rendered by an earlier scaling pass (`"1 1/2"`), or not at all.
/// Only [`Quantity::Numeric`] takes part in scaling; the other variants pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Quantity {
    /// No quantity ("to taste")
    #[default]
    Unspecified,
    /// A plain number in the ingredient's unit
    Numeric(f64),
    /// Display text that is not a plain number
    PreRendered(String),
}

impl Quantity {
    /// Classify a textual quantity
    ///
    /// Text that parses completely as a finite, non-zero number becomes
    /// [`Quantity::Numeric`]. Anything else, including the empty string and
    /// zero written as text, is kept verbatim.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match parse_amount(&text) {
            Some(value) if !is_zero(value) => Self::Numeric(value),
            _ => Self::PreRendered(text),
        }
    }

    /// Whether this quantity is exempt from scaling: absent, zero, or empty text
    #[must_use]
    pub fn is_to_taste(&self) -> bool {
        match self {
            Self::Unspecified => true,
            Self::Numeric(value) => is_zero(*value),
            Self::PreRendered(text) => {
                text.trim().is_empty() || parse_amount(text).is_some_and(is_zero)
            }
        }
    }

    /// Numeric value, if this is a plain number
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Unspecified | Self::PreRendered(_) => None,
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => Ok(()),
            Self::Numeric(value) => write!(f, "{value}"),
            Self::PreRendered(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unspecified => serializer.serialize_none(),
            Self::Numeric(value) => serializer.serialize_f64(*value),
            Self::PreRendered(text) => serializer.serialize_str(text),
        }
    }
}

/// Wire shapes a quantity may take
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawQuantity>::deserialize(deserializer)? {
            None => Self::Unspecified,
            Some(RawQuantity::Number(value)) => Self::Numeric(value),
            Some(RawQuantity::Text(text)) => Self::from_text(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_classification() {
        assert_eq!(Quantity::from_text("2"), Quantity::Numeric(2.0));
        assert_eq!(Quantity::from_text(" 0.5 "), Quantity::Numeric(0.5));
        assert_eq!(
            Quantity::from_text("1 1/2"),
            Quantity::PreRendered("1 1/2".to_owned())
        );
        assert_eq!(
            Quantity::from_text("NaN"),
            Quantity::PreRendered("NaN".to_owned())
        );
        assert_eq!(Quantity::from_text(""), Quantity::PreRendered(String::new()));
        assert_eq!(Quantity::from_text("0"), Quantity::PreRendered("0".to_owned()));
    }

    #[test]
    fn test_to_taste_detection() {
        assert!(Quantity::Unspecified.is_to_taste());
        assert!(Quantity::Numeric(0.0).is_to_taste());
        assert!(Quantity::PreRendered(String::new()).is_to_taste());
        assert!(Quantity::from_text("0").is_to_taste());
        assert!(Quantity::from_text(" 0.0 ").is_to_taste());
        assert!(!Quantity::Numeric(0.25).is_to_taste());
        assert!(!Quantity::PreRendered("a pinch".to_owned()).is_to_taste());
    }

    #[test]
    fn test_deserialize_wire_shapes() {
        let parsed: Vec<Quantity> =
            serde_json::from_str(r#"[null, 0, 2.5, "3", "3/4", ""]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Quantity::Unspecified,
                Quantity::Numeric(0.0),
                Quantity::Numeric(2.5),
                Quantity::Numeric(3.0),
                Quantity::PreRendered("3/4".to_owned()),
                Quantity::PreRendered(String::new()),
            ]
        );
    }

    #[test]
    fn test_zero_text_keeps_its_wire_form() {
        let parsed: Quantity = serde_json::from_str(r#""0""#).unwrap();
        assert!(parsed.is_to_taste());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""0""#);
    }

    #[test]
    fn test_serialize_wire_shapes() {
        let json = serde_json::to_string(&vec![
            Quantity::Unspecified,
            Quantity::Numeric(1.5),
            Quantity::PreRendered("1 1/2".to_owned()),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,1.5,"1 1/2"]"#);
    }
}
