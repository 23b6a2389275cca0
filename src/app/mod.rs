// ABOUTME: Application layer: explicit state, actions, a pure reducer and the session runtime
// ABOUTME: Presentation front ends drive the tracker exclusively through this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application Layer
//!
//! The tracker is modelled as `update(state, action) -> effects`:
//!
//! - [`AppState`] holds the selected day, profile, ledger and AI results
//! - [`update`] applies an [`Action`] without I/O and returns [`Effect`]s
//! - [`Session`] executes effects against the repository and the assistant and feeds
//!   their results back as actions
//!
//! AI requests carry a generation number. A response whose generation is not the
//! latest one issued is ignored, so a slow answer never overwrites a newer request.

/// Actions and the reducer
pub mod action;
/// Effect descriptions
pub mod effects;
/// Effect-executing runtime
pub mod session;
/// State and derived views
pub mod state;

pub use action::{update, Action};
pub use effects::{Effect, EstimateInput};
pub use session::{EstimateOutcomeView, Session};
pub use state::{AppState, Notice};
