// ABOUTME: Recipe CLI - browse, scale, bookmark, and rate recipes from the terminal
// ABOUTME: Parses arguments, loads configuration and catalog, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Browse Italian dinners under 45 minutes
//! recipe-cli browse --cuisine Italian --meal-type dinner --max-cook-time 45
//!
//! # Swipe through the deck, bookmarking on right swipes
//! recipe-cli browse --swipe right --swipe left --swipe right
//!
//! # Scale a recipe for 3 people over 4 days
//! recipe-cli scale 2 --people 3 --days 4
//!
//! # Manage bookmarks
//! recipe-cli bookmark toggle 4
//! recipe-cli bookmark list
//!
//! # Rate a recipe after cooking it
//! recipe-cli rate 4 --rating 5 --cooked
//! recipe-cli ratings 4
//!
//! # Render a decimal as a kitchen fraction
//! recipe-cli fraction 1.333
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use recipe_discovery::catalog::Catalog;
use recipe_discovery::config::environment::env_vars;
use recipe_discovery::config::{DiscoveryConfig, LogLevel};
use recipe_discovery::discovery::SwipeDirection;
use recipe_discovery::errors::{AppError, AppResult};
use recipe_discovery::logging::LoggingConfig;
use recipe_discovery::models::{Difficulty, MealType};
use recipe_discovery::storage::FileStore;
use tracing::debug;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    version,
    about = "Recipe discovery CLI",
    long_about = "Browse a recipe catalog by preference, search and filter it, bookmark and rate recipes, and scale ingredient lists."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Catalog JSON file (defaults to `RECIPE_CATALOG_PATH`, then the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for bookmarks and ratings (defaults to `RECIPE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List recipes matching preferences and filters
    Browse(BrowseArgs),

    /// Scale a recipe's ingredients for people and meal-prep days
    Scale {
        /// Recipe id
        recipe_id: String,

        /// People eating (1-6)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=6))]
        people: Option<u32>,

        /// Meal-prep days (1-7)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=7))]
        days: Option<u32>,
    },

    /// Bookmark management commands
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommand,
    },

    /// Rate a recipe
    Rate {
        /// Recipe id
        recipe_id: String,

        /// Rating from 1 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// Mark the recipe as cooked
        #[arg(long)]
        cooked: bool,
    },

    /// Show recorded ratings
    Ratings {
        /// Only ratings for this recipe
        recipe_id: Option<String>,
    },

    /// Render a decimal amount as a kitchen fraction
    Fraction {
        /// Amount to render
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

/// Questionnaire answers, search text, and active filters for `browse`
#[derive(Args)]
pub struct BrowseArgs {
    /// Preferred cuisine (repeatable; any overlap matches)
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// Preferred difficulty
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Preferred meal
    #[arg(long)]
    pub meal_type: Option<MealType>,

    /// Preferred meal-prep duration in days (1-7)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=7))]
    pub meal_prep_days: Option<u32>,

    /// Dietary restriction (repeatable; any overlap matches)
    #[arg(long = "diet")]
    pub diets: Vec<String>,

    /// Case-insensitive search over title and source
    #[arg(long, default_value = "")]
    pub search: String,

    /// Active difficulty filter (empty string means any)
    #[arg(long)]
    pub filter_difficulty: Option<String>,

    /// Active cuisine filter (exact match)
    #[arg(long)]
    pub filter_cuisine: Option<String>,

    /// Maximum cook time in minutes
    #[arg(long, default_value_t = 999)]
    pub max_cook_time: u32,

    /// Swipe the deck in order (repeatable); right swipes are bookmarked
    #[arg(long = "swipe")]
    pub swipes: Vec<SwipeDirection>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BookmarkCommand {
    /// Bookmark a recipe
    Add {
        /// Recipe id
        recipe_id: String,
    },

    /// Remove a bookmark
    Remove {
        /// Recipe id
        recipe_id: String,
    },

    /// Flip a bookmark
    Toggle {
        /// Recipe id
        recipe_id: String,
    },

    /// List bookmarked recipes in catalog order
    List,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let status = u8::try_from(error.code.exit_status()).unwrap_or(1);
            helpers::display::report_error(error, json);
            ExitCode::from(status)
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = DiscoveryConfig::from_env().map_err(|e| AppError::config(format!("{e:#}")))?;
    init_logging(&config, cli.verbose);
    config.log_summary();

    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let catalog = Catalog::load_or_builtin(catalog_path.as_deref()).await?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    debug!(data_dir = %data_dir.display(), recipes = catalog.len(), "cli ready");

    let ctx = Context {
        catalog,
        store: FileStore::new(data_dir),
        default_plan: config.default_plan,
        json: cli.json,
    };

    match cli.command {
        Command::Browse(args) => commands::browse::run(&ctx, args).await,
        Command::Scale {
            recipe_id,
            people,
            days,
        } => commands::scale::run(&ctx, &recipe_id, people, days),
        Command::Bookmark { action } => match action {
            BookmarkCommand::Add { recipe_id } => commands::bookmark::add(&ctx, &recipe_id).await,
            BookmarkCommand::Remove { recipe_id } => {
                commands::bookmark::remove(&ctx, &recipe_id).await
            }
            BookmarkCommand::Toggle { recipe_id } => {
                commands::bookmark::toggle(&ctx, &recipe_id).await
            }
            BookmarkCommand::List => commands::bookmark::list(&ctx).await,
        },
        Command::Rate {
            recipe_id,
            rating,
            cooked,
        } => commands::rate::record(&ctx, &recipe_id, rating, cooked).await,
        Command::Ratings { recipe_id } => commands::rate::list(&ctx, recipe_id.as_deref()).await,
        Command::Fraction { value } => {
            helpers::display::fraction(value, ctx.json);
            Ok(())
        }
    }
}

/// Logs go to stderr; a CLI stays quiet unless asked
fn init_logging(config: &DiscoveryConfig, verbose: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else if env::var(env_vars::LOG_LEVEL).is_err() {
        LogLevel::Warn
    } else {
        config.log_level
    };
    let logging = LoggingConfig::from_discovery_config(config).with_level(level.to_string());
    if let Err(e) = logging.init() {
        eprintln!("warning: {e}");
    }
}
