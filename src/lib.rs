// ABOUTME: Main library entry point for the Kaloricke AI nutrition tracker
// ABOUTME: Goal calculation, daily aggregation, persistence, AI estimates and the app reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Kaloricke AI
//!
//! A personal nutrition tracker. From a user profile it derives daily energy and
//! macronutrient targets, it sums logged food entries per day, and it can ask an AI
//! model to estimate nutrients from a description or a photo and to suggest meals that
//! fit the remaining budget.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure goal calculator, daily aggregator and meal partition
//! - **Models**: nutrients, food entries, profile, weight history and targets
//! - **Storage**: key-value persistence (`profile`, `items_YYYY-MM-DD`)
//! - **LLM / Services**: provider abstraction, Gemini client and the nutrition assistant
//! - **App**: explicit state, actions and a reducer with an effect-executing session
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kaloricke_ai::intelligence::{aggregate, calculate_goals};
//! use kaloricke_ai::models::UserProfile;
//!
//! let profile = UserProfile::default();
//! let targets = calculate_goals(&profile);
//! let stats = aggregate(&[], targets);
//! println!("Goal today: {} kcal", stats.targets.calories);
//! ```

/// Application state, actions, reducer and session runtime
pub mod app;

/// Day navigation and month grid
pub mod calendar;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Input-boundary validation of user forms
pub mod forms;

/// Goal calculation, aggregation and meal grouping
pub mod intelligence;

/// LLM provider abstraction and prompts
pub mod llm;

/// Structured logging
pub mod logging;

/// Data models
pub mod models;

/// Domain services
pub mod services;

/// Key-value persistence
pub mod storage;
