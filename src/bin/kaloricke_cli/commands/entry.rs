// ABOUTME: Ledger mutation commands for kaloricke-cli
// ABOUTME: Adds validated manual entries and deletes entries by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kaloricke_ai::{
    app::Session,
    errors::{AppError, AppResult},
    forms::ManualEntryForm,
};
use tracing::info;

use crate::helpers::display::display_entry_added;

type Result<T> = AppResult<T>;

/// Validate and log a manual entry on the selected day
pub async fn add(session: &mut Session, form: &ManualEntryForm) -> Result<()> {
    let draft = form.validate()?;
    let entry = session.add_entry(draft).await?;
    info!(entry.id = %entry.id, "Entry logged");
    display_entry_added(&entry);
    Ok(())
}

/// Delete an entry of the selected day
pub async fn remove(session: &mut Session, id: &str) -> Result<()> {
    if !session.delete_entry(id).await? {
        return Err(AppError::not_found(format!("entry {id}")));
    }
    println!("Entry {id} deleted.");
    Ok(())
}
