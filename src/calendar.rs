// ABOUTME: Day navigation and Monday-first month grid with markers for days that have entries
// ABOUTME: Pure date arithmetic on chrono::NaiveDate; saturates at the representable range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Day before `date`
#[must_use]
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// Day after `date`
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Whether `date` is `today`
#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// First day of the month containing `date`
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Same month shifted by `delta` months, anchored on the first day
#[must_use]
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// Number of days in the month containing `date`
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// One day cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The day
    pub date: NaiveDate,
    /// The day's ledger is non-empty
    pub has_data: bool,
    /// The day is today
    pub is_today: bool,
    /// The day is currently selected
    pub is_selected: bool,
}

/// Month view starting on Monday; leading cells before day 1 are `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// First day of the month
    pub month: NaiveDate,
    /// Leading blanks followed by every day of the month
    pub cells: Vec<Option<CalendarDay>>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`
    #[must_use]
    pub fn build(
        anchor: NaiveDate,
        days_with_data: &BTreeSet<NaiveDate>,
        today: NaiveDate,
        selected: NaiveDate,
    ) -> Self {
        let month = first_of_month(anchor);
        let leading = month.weekday().num_days_from_monday() as usize;

        let mut cells: Vec<Option<CalendarDay>> = vec![None; leading];
        cells.extend(
            month
                .iter_days()
                .take(days_in_month(month) as usize)
                .map(|date| {
                    Some(CalendarDay {
                        date,
                        has_data: days_with_data.contains(&date),
                        is_today: is_today(date, today),
                        is_selected: date == selected,
                    })
                }),
        );

        Self { month, cells }
    }

    /// Number of blank cells before day 1
    #[must_use]
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }

    /// Rows of seven cells; the last row may be shorter
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<CalendarDay>]> {
        self.cells.chunks(7)
    }

    /// Days of the month that have entries
    pub fn marked_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().flatten().filter(|day| day.has_data)
    }
}
