// ABOUTME: Prompts and response schemas for the nutrition assistant
// ABOUTME: System prompt loaded at compile time; per-request prompts built from user input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Schemas use the Gemini `Schema` dialect (`OBJECT`, `STRING`, `INTEGER`, ...) and are
//! passed through [`crate::llm::ResponseFormat::Json`].

use serde_json::{json, Value};

use crate::models::MealType;

/// Nutrition assistant system prompt
pub const NUTRITION_SYSTEM_PROMPT: &str = include_str!("nutrition_system.md");

/// Get the system prompt for the nutrition assistant
#[must_use]
pub const fn get_nutrition_system_prompt() -> &'static str {
    NUTRITION_SYSTEM_PROMPT
}

/// Prompt for estimating a free-text food description
#[must_use]
pub fn food_text_prompt(description: &str, language: &str) -> String {
    format!(
        "Analyze the following text describing food and estimate its nutritional values as \
         accurately as possible.\n\
         Text: \"{description}\"\n\n\
         If the text does not make sense as food, return a very low confidence_score.\n\
         Estimate for the total amount mentioned in the text.\n\
         Write food_name and quantity_description in {language}."
    )
}

/// Prompt sent together with a food photo
#[must_use]
pub fn food_image_prompt(language: &str) -> String {
    format!(
        "Identify the food in the image and estimate its nutritional values (calories, protein, \
         carbohydrates, fat, fiber, sugar, saturated fat) for the whole portion you see.\n\
         Write food_name and quantity_description in {language}."
    )
}

/// Prompt asking for meal ideas within a calorie budget
#[must_use]
pub fn meal_plan_prompt(
    remaining_calories: i64,
    meal_type: MealType,
    count: usize,
    language: &str,
) -> String {
    format!(
        "I have {remaining_calories} kcal left in my daily limit.\n\
         Suggest exactly {count} options for: {meal_type}.\n\
         The meals must be nutritionally balanced and fit within the limit (if the limit is \
         very small, suggest something light).\n\
         Answer in {language}."
    )
}

/// Response schema of a single food estimate
#[must_use]
pub fn nutrient_estimate_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "food_name": { "type": "STRING", "description": "Short, descriptive food name" },
            "quantity_description": {
                "type": "STRING",
                "description": "Amount description, e.g. '200 g', '1 piece', 'whole portion'"
            },
            "calories": { "type": "INTEGER", "description": "Total calories (kcal)" },
            "protein_g": { "type": "NUMBER", "description": "Protein in grams" },
            "carbs_g": { "type": "NUMBER", "description": "Carbohydrates in grams" },
            "fat_g": { "type": "NUMBER", "description": "Fat in grams" },
            "fiber_g": { "type": "NUMBER", "description": "Fiber in grams" },
            "sugar_g": { "type": "NUMBER", "description": "Sugar in grams" },
            "saturated_fat_g": { "type": "NUMBER", "description": "Saturated fat in grams" },
            "confidence_score": { "type": "NUMBER", "description": "Model confidence (0.0 to 1.0)" }
        },
        "required": ["food_name", "calories", "protein_g", "carbs_g", "fat_g", "confidence_score"]
    })
}

/// Response schema of a list of meal suggestions
#[must_use]
pub fn meal_suggestions_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Meal name" },
                "description": {
                    "type": "STRING",
                    "description": "Short description of the ingredients (max 10 words)"
                },
                "calories": { "type": "INTEGER" },
                "protein": { "type": "NUMBER" },
                "carbs": { "type": "NUMBER" },
                "fat": { "type": "NUMBER" },
                "reason": {
                    "type": "STRING",
                    "description": "One short sentence on why this is a good choice"
                }
            },
            "required": ["name", "description", "calories", "protein", "carbs", "fat", "reason"]
        }
    })
}
