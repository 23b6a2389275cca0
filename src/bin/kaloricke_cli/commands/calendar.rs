// ABOUTME: Calendar command for kaloricke-cli
// ABOUTME: Prints the month grid around the selected day with markers for logged days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kaloricke_ai::{
    app::Session,
    calendar::{shift_month, MonthGrid},
};

use crate::helpers::display::display_calendar;

/// Show the month `offset` months away from the selected day
pub fn show(session: &Session, offset: i32) {
    let state = session.state();
    let grid = MonthGrid::build(
        shift_month(state.selected_date, offset),
        &state.days_with_data,
        state.today,
        state.selected_date,
    );
    display_calendar(&grid);
}
