// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Scale command: rescales one recipe's ingredients for a serving plan
// ABOUTME: Falls back to the configured default plan for omitted arguments

use recipe_discovery::errors::AppResult;
use recipe_discovery::recipes::ServingPlan;

use super::Context;
use crate::helpers::display;

/// Print the ingredients of `recipe_id` scaled for `people` over `days`
pub fn run(ctx: &Context, recipe_id: &str, people: Option<u32>, days: Option<u32>) -> AppResult<()> {
    let recipe = ctx.catalog.require(recipe_id)?;
    let plan = ServingPlan::new(
        people.unwrap_or(ctx.default_plan.people),
        days.unwrap_or(ctx.default_plan.days),
    );
    let scaled = plan.apply(recipe);
    display::scaled(recipe, plan, &scaled, ctx.json);
    Ok(())
}
