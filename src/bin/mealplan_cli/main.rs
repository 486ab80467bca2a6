// ABOUTME: Mealplan CLI - plan meals from dietary preferences and manage the shopping list
// ABOUTME: Thin front end over the planner and shopping list services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a vegetarian dinner for four, avoiding peanuts, using the offline catalogue
//! mealplan-cli plan --allergy peanut --diet vegetarian --servings 4 --mock
//!
//! # Plan under 30 minutes and put the ingredients on the shopping list
//! mealplan-cli plan --max-minutes 30 --include chicken --add-to-list
//!
//! # Plan several meal slots at once (all or nothing)
//! mealplan-cli plan --meal-type breakfast --meal-type dinner --mock
//!
//! # Show, tick off, and tidy the shopping list
//! mealplan-cli list show
//! mealplan-cli list toggle 6f1c2a4e-0000-4000-8000-000000000000
//! mealplan-cli list clear-checked
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplan::config::AppConfig;
use tracing::debug;

use commands::plan::PlanArgs;

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Meal plan compiler",
    long_about = "Compile dietary preferences into a recipe search, pick and scale one recipe, and keep a shopping list."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Plan a meal (or several meal slots) from dietary preferences
    Plan(Box<PlanArgs>),

    /// Shopping list commands
    List {
        #[command(subcommand)]
        action: ListCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ListCommand {
    /// Print the list grouped by grocery section
    Show {
        /// Print raw JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Tick or untick one item
    Toggle {
        /// Item id as printed by `list show`
        id: String,
    },

    /// Delete one item
    Remove {
        /// Item id as printed by `list show`
        id: String,
    },

    /// Delete every ticked item
    ClearChecked,

    /// Delete every item
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::global();
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Command::Plan(args) => commands::plan::run(config, *args).await?,
        Command::List { action } => match action {
            ListCommand::Show { json } => commands::list::show(config, json).await?,
            ListCommand::Toggle { id } => commands::list::toggle(config, &id).await?,
            ListCommand::Remove { id } => commands::list::remove(config, &id).await?,
            ListCommand::ClearChecked => commands::list::clear_checked(config).await?,
            ListCommand::Clear => commands::list::clear(config).await?,
        },
    }

    Ok(())
}
