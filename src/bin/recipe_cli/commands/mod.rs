// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Subcommand implementations for recipe-cli
// ABOUTME: Shared command context plus browse, scale, bookmark, and rating commands

pub mod bookmark;
pub mod browse;
pub mod rate;
pub mod scale;

use recipe_discovery::catalog::Catalog;
use recipe_discovery::recipes::ServingPlan;
use recipe_discovery::storage::FileStore;

/// Everything a command needs, resolved once at startup
pub struct Context {
    pub catalog: Catalog,
    pub store: FileStore,
    pub default_plan: ServingPlan,
    pub json: bool,
}
