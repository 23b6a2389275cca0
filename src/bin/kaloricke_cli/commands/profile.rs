// ABOUTME: Profile and weight commands for kaloricke-cli
// ABOUTME: Shows the goal calculation, updates the profile and records weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kaloricke_ai::{
    app::Session,
    config::NutritionConfig,
    errors::AppResult,
    forms::{ProfileForm, WeightForm},
    intelligence::goal_breakdown,
};
use tracing::info;

use crate::helpers::display::{display_profile, display_weight_history};

type Result<T> = AppResult<T>;

/// Profile fields given on the command line; `None` keeps the current value
pub struct ProfileChanges {
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub gender: Option<String>,
    pub activity: Option<String>,
    pub goal: Option<String>,
}

/// Show the profile and the derived targets
pub fn show(session: &Session) {
    let state = session.state();
    let breakdown = goal_breakdown(&state.editable_profile, NutritionConfig::global());
    display_profile(
        &state.editable_profile,
        state.profile.is_configured(),
        &breakdown,
    );
}

/// Validate and save profile changes
pub async fn set(session: &mut Session, changes: ProfileChanges) -> Result<()> {
    let current = session.state().editable_profile.clone();
    let mut form = ProfileForm::from_profile(&current);

    if let Some(age) = changes.age {
        form.age = age;
    }
    if let Some(weight) = changes.weight {
        form.weight = weight;
    }
    if let Some(height) = changes.height {
        form.height = height;
    }
    if let Some(gender) = changes.gender {
        form.gender = gender.parse()?;
    }
    if let Some(activity) = changes.activity {
        form.activity = activity.parse()?;
    }
    if let Some(goal) = changes.goal {
        form.goal = goal.parse()?;
    }

    let profile = form.validate(&current)?;
    session.save_profile(profile).await?;
    info!("Profile updated");

    println!("Profile saved.");
    show(session);
    Ok(())
}

/// Record a weight measurement
pub async fn log_weight(session: &mut Session, on: String, weight: String) -> Result<()> {
    let form = WeightForm { date: on, weight };
    let record = form.validate(session.state().today)?;
    session.log_weight(record).await?;

    let profile = &session.state().editable_profile;
    println!(
        "Recorded {:.1} kg on {}. Current weight: {:.1} kg",
        record.weight, record.date, profile.weight
    );
    Ok(())
}

/// List recorded weights
pub fn weight_history(session: &Session) {
    display_weight_history(&session.state().editable_profile);
}
