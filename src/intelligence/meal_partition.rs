// ABOUTME: Groups a day's ledger into meal sections for display
// ABOUTME: Fixed display order with a trailing bucket for unrecognized meal labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{FoodEntry, MealType, Nutrients};

/// Label of the trailing section holding unrecognized meal types
pub const OTHER_SECTION: &str = "Other";

/// Entries of one meal section, in ledger order
#[derive(Debug, Clone, PartialEq)]
pub struct MealGroup<'a> {
    /// Section meal type
    pub meal_type: MealType,
    /// Entries belonging to the section
    pub entries: Vec<&'a FoodEntry>,
}

impl MealGroup<'_> {
    /// Nutrient totals of the section
    #[must_use]
    pub fn total(&self) -> Nutrients {
        self.entries.iter().map(|entry| entry.nutrients).sum()
    }

    /// Whether the section has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ledger split into meal sections
///
/// The four known meals are always present, in display order, even when empty.
/// Entries with an unrecognized label, whatever its text, are kept together in a
/// trailing [`OTHER_SECTION`] section that only exists when it has entries. Every
/// entry lands in exactly one section.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPartition<'a> {
    groups: Vec<MealGroup<'a>>,
}

impl<'a> MealPartition<'a> {
    /// Sections in display order
    #[must_use]
    pub fn groups(&self) -> &[MealGroup<'a>] {
        &self.groups
    }

    /// Section for a meal type; any unrecognized label resolves to the trailing section
    #[must_use]
    pub fn group(&self, meal_type: &MealType) -> Option<&MealGroup<'a>> {
        self.groups
            .iter()
            .find(|group| same_section(&group.meal_type, meal_type))
    }

    /// Total number of entries across sections
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }
}

/// Partition entries by meal type
#[must_use]
pub fn partition(entries: &[FoodEntry]) -> MealPartition<'_> {
    let mut groups: Vec<MealGroup<'_>> = MealType::KNOWN
        .into_iter()
        .map(|meal_type| MealGroup {
            meal_type,
            entries: Vec::new(),
        })
        .collect();
    let mut other = MealGroup {
        meal_type: MealType::Other(OTHER_SECTION.to_owned()),
        entries: Vec::new(),
    };

    for entry in entries {
        match groups.iter_mut().find(|group| group.meal_type == entry.meal_type) {
            Some(group) => group.entries.push(entry),
            None => other.entries.push(entry),
        }
    }

    if !other.is_empty() {
        groups.push(other);
    }
    MealPartition { groups }
}

fn same_section(a: &MealType, b: &MealType) -> bool {
    if a.is_known() || b.is_known() {
        a == b
    } else {
        true
    }
}
