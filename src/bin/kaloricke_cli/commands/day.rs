// ABOUTME: Day overview and nutrient detail commands for kaloricke-cli
// ABOUTME: Read-only views over the selected day's ledger and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kaloricke_ai::{
    app::Session,
    errors::{AppError, AppResult},
    intelligence::{aggregator::DETAIL_NUTRIENTS, nutrient_detail},
};

use crate::helpers::display::{display_day, display_nutrient_detail};

type Result<T> = AppResult<T>;

/// Show totals, targets and meals of the selected day
pub fn show(session: &Session) {
    display_day(session.state());
}

/// Show the detail view of protein, carbs or fat
pub fn detail(session: &Session, nutrient: &str) -> Result<()> {
    let wanted = nutrient.trim().to_lowercase();
    let kind = DETAIL_NUTRIENTS
        .into_iter()
        .find(|kind| kind.label() == wanted)
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "no detail view for '{nutrient}', expected protein, carbs or fat"
            ))
        })?;

    let state = session.state();
    let stats = state.stats();
    if let Some(detail) = nutrient_detail(kind, &state.ledger, &stats) {
        display_nutrient_detail(&detail);
    }
    Ok(())
}
