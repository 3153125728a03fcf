// ABOUTME: Tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides, and range checks of the serving plan variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use recipe_discovery::config::environment::{default_data_dir, env_vars};
use recipe_discovery::config::{DiscoveryConfig, Environment};
use recipe_discovery::recipes::ServingPlan;
use serial_test::serial;

const ALL_VARS: [&str; 5] = [
    env_vars::DATA_DIR,
    env_vars::CATALOG_PATH,
    env_vars::DEFAULT_PEOPLE,
    env_vars::DEFAULT_DAYS,
    env_vars::ENVIRONMENT,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = DiscoveryConfig::from_env().unwrap();
    assert_eq!(config.default_plan, ServingPlan::new(1, 1));
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.data_dir, default_data_dir());
    assert_eq!(config.environment, Environment::Development);
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
#[serial]
fn test_overrides_are_read() {
    clear_env();
    env::set_var(env_vars::DATA_DIR, "/tmp/recipe-data");
    env::set_var(env_vars::CATALOG_PATH, "/tmp/catalog.json");
    env::set_var(env_vars::DEFAULT_PEOPLE, "4");
    env::set_var(env_vars::DEFAULT_DAYS, " 7 ");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = DiscoveryConfig::from_env().unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/recipe-data"));
    assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    assert_eq!(config.default_plan, ServingPlan::new(4, 7));
    assert!(config.environment.is_production());
    clear_env();
}

#[test]
#[serial]
fn test_blank_paths_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_vars::DATA_DIR, "  ");
    env::set_var(env_vars::CATALOG_PATH, "");
    let config = DiscoveryConfig::from_env().unwrap();
    assert_eq!(config.data_dir, default_data_dir());
    assert_eq!(config.catalog_path, None);
    clear_env();
}

// ============================================================================
// Validation
// ============================================================================

#[test]
#[serial]
fn test_out_of_range_people_is_rejected() {
    clear_env();
    for bad in ["0", "7"] {
        env::set_var(env_vars::DEFAULT_PEOPLE, bad);
        let err = DiscoveryConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(env_vars::DEFAULT_PEOPLE), "{err}");
    }
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_days_is_rejected() {
    clear_env();
    env::set_var(env_vars::DEFAULT_DAYS, "8");
    assert!(DiscoveryConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_non_numeric_value_is_rejected() {
    clear_env();
    env::set_var(env_vars::DEFAULT_PEOPLE, "two");
    let err = DiscoveryConfig::from_env().unwrap_err();
    assert!(format!("{err:#}").contains("whole number"), "{err:#}");
    clear_env();
}
