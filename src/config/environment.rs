// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads data directory, catalog location, and default serving plan from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use anyhow::{bail, Context, Result};
use recipe_core::constants::questionnaire::{MAX_PEOPLE, MAX_PREP_DAYS, MIN_PEOPLE, MIN_PREP_DAYS};
use recipe_intelligence::recipes::ServingPlan;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable names
pub mod env_vars {
    /// Directory holding persisted bookmarks and ratings
    pub const DATA_DIR: &str = "RECIPE_DATA_DIR";
    /// JSON catalog to load instead of the built-in one
    pub const CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Default people count for scaling
    pub const DEFAULT_PEOPLE: &str = "RECIPE_DEFAULT_PEOPLE";
    /// Default meal-prep days for scaling
    pub const DEFAULT_DAYS: &str = "RECIPE_DEFAULT_DAYS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "RUST_LOG";
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the discovery application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Directory holding persisted key-value files
    pub data_dir: PathBuf,
    /// Catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Serving plan used when the caller gives none
    pub default_plan: ServingPlan,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            data_dir: default_data_dir(),
            catalog_path: None,
            default_plan: ServingPlan::default(),
        }
    }
}

impl DiscoveryConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or is out of range
    pub fn from_env() -> Result<Self> {
        let environment = env::var(env_vars::ENVIRONMENT)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();
        let log_level = env::var(env_vars::LOG_LEVEL)
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();
        let data_dir = env::var(env_vars::DATA_DIR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);
        let catalog_path = env::var(env_vars::CATALOG_PATH)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let people = parse_bounded(env_vars::DEFAULT_PEOPLE, 1, MIN_PEOPLE, MAX_PEOPLE)?;
        let days = parse_bounded(env_vars::DEFAULT_DAYS, 1, MIN_PREP_DAYS, MAX_PREP_DAYS)?;

        Ok(Self {
            environment,
            log_level,
            data_dir,
            catalog_path,
            default_plan: ServingPlan::new(people, days),
        })
    }

    /// Log the loaded settings; call once a subscriber is installed
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            data_dir = %self.data_dir.display(),
            catalog = self
                .catalog_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            "configuration loaded"
        );
        debug!(
            people = self.default_plan.people,
            days = self.default_plan.days,
            "default serving plan"
        );
    }
}

/// `<platform data dir>/recipe-discovery`, or `./data` when the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data"),
        |dir| dir.join("recipe-discovery"),
    )
}

/// Read an integer variable, enforcing `min..=max`
fn parse_bounded(var: &str, default: u32, min: u32, max: u32) -> Result<u32> {
    let Ok(raw) = env::var(var) else {
        return Ok(default);
    };
    let value: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{var} must be a whole number, got '{raw}'"))?;
    if !(min..=max).contains(&value) {
        bail!("{var} must be between {min} and {max}, got {value}");
    }
    Ok(value)
}
