// ABOUTME: Re-exports command modules for kaloricke-cli
// ABOUTME: Provides access to day, entry, profile, assistant and calendar commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod assistant;
pub mod calendar;
pub mod day;
pub mod entry;
pub mod profile;
