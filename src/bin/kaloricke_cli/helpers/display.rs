// ABOUTME: Output formatting helpers for kaloricke-cli
// ABOUTME: Renders days, meals, nutrient details, profiles, estimates, suggestions and calendars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kaloricke_ai::{
    app::AppState,
    calendar::MonthGrid,
    forms::EstimateDraft,
    intelligence::{percent_of_goal, ring_segments, GoalBreakdown, NutrientDetail},
    models::{FoodEntry, NutrientKind, UserProfile},
    services::MealSuggestion,
};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Display the selected day: progress per nutrient, budget banner and meal sections
pub fn display_day(state: &AppState) {
    let stats = state.stats();
    let title = if state.is_viewing_today() {
        format!("Today, {}", state.selected_date)
    } else {
        state.selected_date.to_string()
    };

    println!("\n{title}");
    println!("{}", rule());
    for kind in NutrientKind::ALL {
        let current = stats.current.get(kind);
        let goal = stats.targets.get(kind);
        println!(
            "   {:<14} {:>7.0} / {:<7.0} {:<4} {:>3.0}%",
            kind.label(),
            current,
            goal,
            kind.unit(),
            percent_of_goal(current, goal)
        );
    }

    let ring = ring_segments(&stats);
    println!(
        "\n   Energy from protein {:.0} kcal, carbs {:.0} kcal, fat {:.0} kcal, {:.0} kcal open",
        ring.macros.protein, ring.macros.carbs, ring.macros.fat, ring.remaining
    );
    println!("\n{}", state.budget_message());

    for group in state.partition().groups() {
        let total = group.total();
        println!("\n{} ({:.0} kcal)", group.meal_type, total.calories);
        if group.is_empty() {
            println!("   -");
        }
        for entry in &group.entries {
            display_entry_line(entry);
        }
    }

    if let Some(notice) = &state.notice {
        println!("\nNote: {notice}");
    }
}

fn display_entry_line(entry: &FoodEntry) {
    let n = &entry.nutrients;
    println!(
        "   {:<28} {:<12} {:>5.0} kcal  P {:.1} g  C {:.1} g  F {:.1} g   [{}]",
        entry.name, entry.quantity, n.calories, n.protein, n.carbs, n.fat, entry.id
    );
}

/// Display a newly logged entry
pub fn display_entry_added(entry: &FoodEntry) {
    println!("\nLogged for {}:", entry.meal_type);
    display_entry_line(entry);
}

/// Display the detail view of protein, carbs or fat
pub fn display_nutrient_detail(detail: &NutrientDetail) {
    let progress = &detail.progress;
    println!("\n{}", progress.kind.label());
    println!("{}", rule());
    println!(
        "   {:.1} / {:.0} {} ({:.0}% of goal)",
        progress.current,
        progress.goal,
        progress.kind.unit(),
        progress.percent
    );

    println!("\nBy meal:");
    if detail.by_meal.is_empty() {
        println!("   nothing logged");
    }
    for contribution in &detail.by_meal {
        println!(
            "   {:<10} {:>7.1} {} ({:.0}%)",
            contribution.meal_type,
            contribution.amount,
            progress.kind.unit(),
            contribution.share_percent
        );
    }

    for sub in &detail.sub_metrics {
        println!(
            "\n   {:<14} {:.1} / {:.0} {} ({:.0}%)",
            sub.kind.label(),
            sub.current,
            sub.goal,
            sub.kind.unit(),
            sub.percent
        );
    }
}

/// Display the profile with the calculation that produced the targets
pub fn display_profile(profile: &UserProfile, configured: bool, breakdown: &GoalBreakdown) {
    println!("\nProfile{}", if configured { "" } else { " (not set up, defaults shown)" });
    println!("{}", rule());
    println!("   Age:      {} years", profile.age);
    println!("   Weight:   {} kg", profile.weight);
    println!("   Height:   {} cm", profile.height);
    println!("   Gender:   {}", profile.gender);
    println!("   Activity: {}", profile.activity);
    println!("   Goal:     {}", profile.goal);

    if configured {
        println!("\n   BMR  {:.0} kcal", breakdown.bmr);
        println!("   TDEE {:.0} kcal", breakdown.tdee);
        println!("   Goal adjustment {:+.0} kcal", breakdown.goal_adjustment);
    }

    let targets = if configured {
        breakdown.targets
    } else {
        kaloricke_ai::models::DailyTargets::fallback()
    };
    println!("\nDaily targets:");
    for kind in NutrientKind::ALL {
        println!("   {:<14} {:>6.0} {}", kind.label(), targets.get(kind), kind.unit());
    }
}

/// Display the weight history, oldest first
pub fn display_weight_history(profile: &UserProfile) {
    println!("\nWeight history");
    println!("{}", rule());
    if profile.weight_history.is_empty() {
        println!("   no weights recorded");
        return;
    }
    for record in profile.weight_history.records() {
        println!("   {}  {:.1} kg", record.date, record.weight);
    }
}

/// Display an estimate awaiting confirmation
pub fn display_estimate(draft: &EstimateDraft) {
    let n = &draft.nutrients;
    println!("\nEstimate: {} ({})", draft.name, draft.quantity);
    println!("{}", rule());
    for kind in NutrientKind::ALL {
        println!("   {:<14} {:>7.1} {}", kind.label(), n.get(kind), kind.unit());
    }
    println!("   confidence     {:>7.0} %", draft.confidence * 100.0);
}

/// Display meal suggestions, numbered from 1
pub fn display_suggestions(suggestions: &[MealSuggestion]) {
    println!("\nMeal ideas");
    println!("{}", rule());
    for (index, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}. {} ({:.0} kcal, P {:.0} g, C {:.0} g, F {:.0} g)",
            index + 1,
            suggestion.name,
            suggestion.calories,
            suggestion.protein,
            suggestion.carbs,
            suggestion.fat
        );
        println!("   {}", suggestion.description);
        println!("   {}", suggestion.reason);
    }
}

/// Display a Monday-first month grid; `*` marks days with entries, `[ ]` today
pub fn display_calendar(grid: &MonthGrid) {
    println!("\n{}", grid.month.format("%B %Y"));
    println!(" Mo  Tu  We  Th  Fr  Sa  Su");
    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_owned(),
                Some(day) => {
                    let marker = if day.has_data { '*' } else { ' ' };
                    if day.is_today {
                        format!("[{:>2}]", chrono::Datelike::day(&day.date))
                    } else {
                        format!(" {:>2}{marker}", chrono::Datelike::day(&day.date))
                    }
                }
            })
            .collect();
        println!("{}", row.trim_end());
    }
    println!("\n{} day(s) with entries", grid.marked_days().count());
}
