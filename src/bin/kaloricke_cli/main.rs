// ABOUTME: Kaloricke CLI - command-line front end of the nutrition tracker
// ABOUTME: Logs food, shows daily progress, manages the profile and talks to the AI assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show today's totals, targets and meals
//! kaloricke-cli day
//!
//! # Log a food entry for lunch (decimal comma accepted)
//! kaloricke-cli add --name "Chicken salad" --calories 420 --protein 35 --carbs 12 --fat 24,5 --meal lunch
//!
//! # Look at yesterday
//! kaloricke-cli --date 2025-03-01 day
//!
//! # Configure the profile
//! kaloricke-cli profile set --age 34 --weight 81.5 --height 182 --gender male --activity active --goal lose_slow
//!
//! # Ask the assistant and log the estimate as a snack
//! kaloricke-cli estimate text "a banana and a small yoghurt" --meal snack
//!
//! # Meal ideas for the remaining budget
//! kaloricke-cli suggest --meal dinner
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use kaloricke_ai::{
    app::Session,
    config::AppConfig,
    errors::AppResult,
    logging::LoggingConfig,
    services::NutritionAssistant,
    storage::{open_store, NutritionRepository},
};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "kaloricke-cli",
    about = "Kaloricke AI nutrition tracker",
    long_about = "Track calories and macronutrients per day against targets derived from your profile, with optional AI estimates and meal ideas."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Day to work on (YYYY-MM-DD, default today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show totals, targets and meals of the day
    Day,

    /// Log a food entry manually
    Add {
        /// Food name (empty logs "Unknown food")
        #[arg(long, default_value = "")]
        name: String,

        /// Quantity description
        #[arg(long, default_value = "1 portion")]
        quantity: String,

        /// Calories (kcal)
        #[arg(long, default_value = "")]
        calories: String,

        /// Protein (g)
        #[arg(long, default_value = "")]
        protein: String,

        /// Carbohydrates (g)
        #[arg(long, default_value = "")]
        carbs: String,

        /// Fat (g)
        #[arg(long, default_value = "")]
        fat: String,

        /// Fiber (g)
        #[arg(long, default_value = "")]
        fiber: String,

        /// Sugar (g)
        #[arg(long, default_value = "")]
        sugar: String,

        /// Saturated fat (g)
        #[arg(long, default_value = "")]
        saturated_fat: String,

        /// Meal: breakfast, lunch, snack or dinner
        #[arg(long, short = 'm')]
        meal: String,
    },

    /// Delete a food entry of the day by id
    Remove {
        /// Entry id as shown by `day`
        id: String,
    },

    /// Protein, carbs or fat in detail: progress, meals and related nutrients
    Detail {
        /// protein, carbs or fat
        nutrient: String,
    },

    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Weight tracking commands
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// AI nutrient estimates
    Estimate {
        #[command(subcommand)]
        action: EstimateCommand,
    },

    /// AI meal ideas for the remaining calories of the day
    Suggest {
        /// Meal: breakfast, lunch, snack or dinner
        #[arg(long, short = 'm')]
        meal: String,

        /// Log the suggestion with this number (1-based)
        #[arg(long)]
        accept: Option<usize>,
    },

    /// Month view with days that have entries
    Calendar {
        /// Months to move from the selected day (-1 = previous month)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile and the derived targets
    Show,

    /// Update the profile; omitted fields keep their current value
    Set {
        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<String>,

        /// Height in cm
        #[arg(long)]
        height: Option<String>,

        /// male or female
        #[arg(long)]
        gender: Option<String>,

        /// sedentary, light, moderate, active or extra
        #[arg(long)]
        activity: Option<String>,

        /// lose_fast, lose_slow, maintain or gain
        #[arg(long)]
        goal: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightCommand {
    /// Record a weight (kg); the newest record becomes the profile weight
    Log {
        /// Weight in kg
        weight: String,

        /// Measurement day (YYYY-MM-DD, default today)
        #[arg(long, default_value = "")]
        on: String,
    },

    /// List recorded weights
    History,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum EstimateCommand {
    /// Estimate a free-text description
    Text {
        /// What you ate, e.g. "two slices of rye bread with butter"
        description: String,

        /// Log the estimate for this meal after showing it
        #[arg(long, short = 'm')]
        meal: Option<String>,
    },

    /// Estimate a food photo
    Image {
        /// Path to a JPEG, PNG, GIF or WebP image
        path: PathBuf,

        /// Log the estimate for this meal after showing it
        #[arg(long, short = 'm')]
        meal: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = AppConfig::from_env()?.with_data_dir(cli.data_dir);
    let store = open_store(&config).await?;
    debug!(backend = store.name(), "Store opened");

    let today = Local::now().date_naive();
    let mut session = Session::new(
        NutritionRepository::new(store),
        NutritionAssistant::from_config(&config.assistant),
        today,
    );
    session.start().await?;
    if let Some(date) = cli.date {
        session.select_date(date).await?;
    }

    match cli.command {
        Command::Day => commands::day::show(&session),
        Command::Add {
            name,
            quantity,
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            saturated_fat,
            meal,
        } => {
            let form = kaloricke_ai::forms::ManualEntryForm {
                name,
                quantity,
                calories,
                protein,
                carbs,
                fat,
                fiber,
                sugar,
                saturated_fat,
                meal_type: meal.parse()?,
            };
            commands::entry::add(&mut session, &form).await?;
        }
        Command::Remove { id } => commands::entry::remove(&mut session, &id).await?,
        Command::Detail { nutrient } => commands::day::detail(&session, &nutrient)?,
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&session),
            ProfileCommand::Set {
                age,
                weight,
                height,
                gender,
                activity,
                goal,
            } => {
                let changes = commands::profile::ProfileChanges {
                    age,
                    weight,
                    height,
                    gender,
                    activity,
                    goal,
                };
                commands::profile::set(&mut session, changes).await?;
            }
        },
        Command::Weight { action } => match action {
            WeightCommand::Log { weight, on } => {
                commands::profile::log_weight(&mut session, on, weight).await?;
            }
            WeightCommand::History => commands::profile::weight_history(&session),
        },
        Command::Estimate { action } => match action {
            EstimateCommand::Text { description, meal } => {
                commands::assistant::estimate_text(&mut session, &description, meal.as_deref())
                    .await?;
            }
            EstimateCommand::Image { path, meal } => {
                commands::assistant::estimate_image(&mut session, &path, meal.as_deref()).await?;
            }
        },
        Command::Suggest { meal, accept } => {
            commands::assistant::suggest(&mut session, meal.parse()?, accept).await?;
        }
        Command::Calendar { offset } => commands::calendar::show(&session, offset),
    }

    Ok(())
}
