// ABOUTME: Configuration management module for the discovery application
// ABOUTME: Environment-only configuration: data directory, catalog source, serving defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable driven configuration
pub mod environment;

pub use environment::{DiscoveryConfig, Environment, LogLevel};
