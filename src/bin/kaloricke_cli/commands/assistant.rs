// ABOUTME: AI assistant commands for kaloricke-cli
// ABOUTME: Text and photo estimates with an optional confirm step, and meal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use kaloricke_ai::{
    app::{EstimateOutcomeView, Session},
    errors::{AppError, AppResult},
    models::MealType,
};
use tracing::info;

use crate::helpers::display::{display_entry_added, display_estimate, display_suggestions};

type Result<T> = AppResult<T>;

/// Estimate a text description and optionally log it
pub async fn estimate_text(
    session: &mut Session,
    description: &str,
    meal: Option<&str>,
) -> Result<()> {
    let view = session.estimate_text(description).await?;
    finish_estimate(session, view, meal).await
}

/// Estimate a food photo and optionally log it
pub async fn estimate_image(session: &mut Session, path: &Path, meal: Option<&str>) -> Result<()> {
    let image = tokio::fs::read(path).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read image {}: {e}", path.display()))
    })?;
    let view = session.estimate_image(image).await?;
    finish_estimate(session, view, meal).await
}

async fn finish_estimate(
    session: &mut Session,
    view: EstimateOutcomeView,
    meal: Option<&str>,
) -> Result<()> {
    match view {
        EstimateOutcomeView::Draft(draft) => {
            display_estimate(&draft);
            match meal {
                Some(meal) => {
                    let meal_type: MealType = meal.parse()?;
                    let entry = session.confirm_estimate(meal_type).await?;
                    display_entry_added(&entry);
                }
                None => {
                    println!("\nRun again with --meal <meal> to log this estimate.");
                    session.discard_estimate().await?;
                }
            }
            Ok(())
        }
        EstimateOutcomeView::Unavailable(message) => {
            println!("{message}");
            Ok(())
        }
    }
}

/// Ask for meal ideas and optionally log one of them
pub async fn suggest(session: &mut Session, meal: MealType, accept: Option<usize>) -> Result<()> {
    if !session.assistant().is_available() {
        return Err(AppError::external_unavailable(
            "The AI assistant is not configured. Set GEMINI_API_KEY to enable it.",
        ));
    }

    println!("{}", session.state().budget_message());
    session.request_suggestions(meal).await?;

    let suggestions = session.state().suggestions.clone();
    if suggestions.is_empty() {
        if let Some(notice) = &session.state().notice {
            println!("{notice}");
        }
        return Ok(());
    }
    display_suggestions(&suggestions);

    if let Some(number) = accept {
        let entry = session
            .accept_suggestion(number.saturating_sub(1))
            .await?
            .ok_or_else(|| AppError::not_found(format!("suggestion {number}")))?;
        info!(entry.id = %entry.id, "Suggestion logged");
        display_entry_added(&entry);
    }
    Ok(())
}
