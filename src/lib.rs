// ABOUTME: Main library entry point for the Levain bread calculation engine
// ABOUTME: Pure, deterministic recipe math and schedule generation for home bakers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

#![deny(unsafe_code)]

//! # Levain
//!
//! A deterministic bread recipe and fermentation schedule engine. Given a
//! handful of baker inputs (flour mass, target hydration, leavening method,
//! mixer, room temperature, fermentation speed, preferment storage), the
//! engine computes:
//!
//! - precise ingredient masses, split between an optional preferment and
//!   the final dough with mass conservation guaranteed,
//! - the target mixing-water temperature via the Rule of 3 / Rule of 4,
//! - bulk, proof, and preferment durations from simplified Q10-style
//!   fermentation kinetics and a hydration factor,
//! - an ordered, time-annotated list of procedural steps.
//!
//! The engine is entirely synchronous, side-effect-free, and stateless:
//! every public function is a pure value transformer, and recomputing on
//! every input change is the intended usage pattern. Out-of-range inputs
//! saturate through clamping instead of producing errors.
//!
//! ## Example
//!
//! ```rust
//! use levain::calculator::calculate_recipe;
//! use levain::config::EngineConfig;
//! use levain::models::RecipeInputs;
//! use levain::steps::generate_steps;
//!
//! let inputs = RecipeInputs::default();
//! let config = EngineConfig::default();
//!
//! let recipe = calculate_recipe(&inputs, &config);
//! let schedule = generate_steps(&inputs, &recipe, &config);
//!
//! assert_eq!(recipe.water_total, 350.0);
//! assert!(!schedule.is_empty());
//! ```

/// Scalar calculators and the recipe aggregator
pub mod calculator;

/// Engine configuration with env overrides and validation
pub mod config;

/// Named numeric parameters behind every formula
pub mod constants;

/// Descriptive label helpers for display layers
pub mod labels;

/// Input, output, and schedule data models
pub mod models;

/// Schedule generation from a calculated recipe
pub mod steps;

/// Persistable per-step countdown state for external consumers
pub mod timers;

/// Unit conversions and duration formatting
pub mod units;
