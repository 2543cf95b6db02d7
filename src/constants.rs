// ABOUTME: Baking constants grounded in dough temperature and fermentation practice
// ABOUTME: Provides named parameters to eliminate magic numbers in the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Baking constants used throughout the calculation engine
//!
//! These values come from established artisan-baking practice and the
//! simplified enzyme-kinetics model the engine implements. Changing one of
//! them changes every recipe the engine produces; runtime overrides go
//! through [`crate::config::EngineConfig`] instead.

/// Dough and water temperature parameters
///
/// References:
/// - Hamelman, J. (2012). *Bread: A Baker's Book of Techniques and Recipes*, 2nd ed., Ch. 1
/// - Suas, M. (2008). *Advanced Bread and Pastry*, Ch. 3 (desired dough temperature)
pub mod temperature {
    /// Desired dough temperature immediately after mixing (°C)
    /// The reference point for both the water-temperature rules and Q10 kinetics
    pub const DDT_CELSIUS: f64 = 24.0;

    /// Multiplier on DDT for the direct-method "Rule of 3"
    /// (three temperature contributors: room, flour, friction)
    pub const RULE_OF_THREE: f64 = 3.0;

    /// Multiplier on DDT for the preferment "Rule of 4"
    /// (four contributors: room, flour, friction, preferment)
    pub const RULE_OF_FOUR: f64 = 4.0;

    /// Commercial refrigeration temperature (°C), used for fridge-stored preferments
    pub const FRIDGE_CELSIUS: f64 = 4.0;

    /// Coldest usable mixing water (°C); ice water saturates here
    pub const WATER_TEMP_MIN_CELSIUS: f64 = 0.0;

    /// Hottest usable mixing water (°C); above this yeast begins to die off
    pub const WATER_TEMP_MAX_CELSIUS: f64 = 40.0;
}

/// Friction factor: empirical temperature rise from mechanical mixing
///
/// Reference: Suas, M. (2008). *Advanced Bread and Pastry*, Ch. 3
pub mod friction {
    /// Friction contribution of hand mixing (°C)
    pub const HAND_CELSIUS: f64 = 2.0;

    /// Friction contribution of a stand mixer (°C)
    pub const MACHINE_CELSIUS: f64 = 12.0;

    /// Hydration above which slack dough reduces mixing friction (%, exclusive)
    pub const HIGH_HYDRATION_THRESHOLD_PCT: f64 = 75.0;

    /// Friction reduction applied above the high-hydration threshold (°C)
    pub const HIGH_HYDRATION_REDUCTION_CELSIUS: f64 = 2.0;
}

/// Yeast dosing parameters
pub mod yeast {
    /// Fresh yeast as a baker's percentage of total flour at standard speed
    pub const BASE_PCT: f64 = 1.5;

    /// Hydration above which yeast is reduced (%, exclusive)
    ///
    /// Numerically equal to `friction::HIGH_HYDRATION_THRESHOLD_PCT` but kept
    /// independently configurable; wetter dough ferments faster regardless of
    /// how it mixes.
    pub const HIGH_HYDRATION_THRESHOLD_PCT: f64 = 75.0;

    /// Multiplier applied to the yeast percentage above the threshold (10% reduction)
    pub const HIGH_HYDRATION_FACTOR: f64 = 0.90;
}

/// Final dough composition
pub mod dough {
    /// Salt as a baker's percentage of total flour
    pub const SALT_PCT: f64 = 2.0;
}

/// Preferment (biga / poolish) composition and fermentation parameters
///
/// Reference: Hamelman, J. (2012). *Bread*, Ch. 5 (pre-ferments)
pub mod preferment {
    /// Share of total flour fermented in advance, for both biga and poolish
    pub const FLOUR_SHARE: f64 = 0.30;

    /// Biga hydration (%): stiff preferment
    pub const BIGA_HYDRATION_PCT: f64 = 50.0;

    /// Poolish hydration (%): liquid preferment
    pub const POOLISH_HYDRATION_PCT: f64 = 100.0;

    /// Biga yeast as a percentage of preferment flour
    pub const BIGA_YEAST_PCT: f64 = 1.0;

    /// Poolish yeast as a percentage of preferment flour (10x less than biga)
    pub const POOLISH_YEAST_PCT: f64 = 0.1;

    /// Base preferment maturation time (minutes), calibrated for biga at the DDT
    pub const BASE_TIME_MINUTES: f64 = 480.0;

    /// Weight on the log10 yeast-share ratio in the maturation-time model
    /// (evaluates to 1.0 for biga, 1.5 for poolish)
    pub const YEAST_LOG_WEIGHT: f64 = 0.5;

    /// Cap on fridge-stored biga maturation (minutes); refrigeration plateaus
    /// fermentation rather than permitting unbounded Q10 scaling
    pub const BIGA_FRIDGE_CAP_MINUTES: f64 = 16.0 * 60.0;

    /// Cap on fridge-stored poolish maturation (minutes)
    pub const POOLISH_FRIDGE_CAP_MINUTES: f64 = 24.0 * 60.0;
}

/// Bulk and proof fermentation kinetics
///
/// The temperature model is Q10-style: fermentation rate doubles or halves
/// for each fixed temperature step away from the DDT reference.
///
/// Reference: Cauvain, S.P. & Young, L.S. (2007). *Technology of Breadmaking*, Ch. 3
pub mod fermentation {
    /// Bulk fermentation time at the DDT, standard speed, baseline hydration (minutes)
    pub const BASE_BULK_MINUTES: f64 = 120.0;

    /// Temperature step that halves (warmer) or doubles (colder) fermentation time (°C)
    pub const Q10_STEP_CELSIUS: f64 = 8.0;

    /// Baseline hydration (%) at which the hydration factor is exactly 1.0
    pub const BASELINE_HYDRATION_PCT: f64 = 65.0;

    /// Slowdown per point of hydration below baseline (drier dough ferments slower)
    pub const DRY_SLOWDOWN_PER_PCT: f64 = 0.01;

    /// Cap on the dry-dough slowdown (15%)
    pub const DRY_SLOWDOWN_CAP: f64 = 0.15;

    /// Speedup per point of hydration above baseline (wetter dough ferments faster)
    pub const WET_SPEEDUP_PER_PCT: f64 = 0.015;

    /// Cap on the wet-dough speedup (30%)
    pub const WET_SPEEDUP_CAP: f64 = 0.30;

    /// Final proof as a fraction of bulk time
    pub const PROOF_RATIO: f64 = 0.50;

    /// Shortest useful final proof (minutes)
    pub const PROOF_MIN_MINUTES: f64 = 30.0;

    /// Longest final proof before overproofing risk (minutes)
    pub const PROOF_MAX_MINUTES: f64 = 120.0;
}

/// Fixed step durations for the generated schedule (minutes)
pub mod durations {
    /// Autolyse rest for high-hydration dough
    pub const AUTOLYSE_MINUTES: u32 = 45;

    /// Hand kneading
    pub const HAND_MIX_MINUTES: u32 = 15;

    /// Stand-mixer kneading
    pub const MACHINE_MIX_MINUTES: u32 = 12;

    /// Bench rest between pre-shape and final shape
    pub const PRESHAPE_REST_MINUTES: u32 = 20;

    /// Final shaping
    pub const FINAL_SHAPE_MINUTES: u32 = 5;

    /// Oven preheat; overlaps the proof window and is excluded from total time
    pub const OVEN_PREHEAT_MINUTES: u32 = 45;

    /// Bake with the dutch-oven lid on (steam phase)
    pub const COVERED_BAKE_MINUTES: u32 = 22;

    /// Bake uncovered (crust phase)
    pub const UNCOVERED_BAKE_MINUTES: u32 = 22;

    /// Cooling before slicing
    pub const COOLING_MINUTES: u32 = 60;

    /// Coil folds spread across a high-hydration bulk window
    pub const COIL_FOLD_COUNT: u32 = 4;

    /// Hydration above which the schedule uses autolyse, bassinage, and coil
    /// folds instead of plain mixing and a single bulk rise (%, exclusive)
    pub const HIGH_HYDRATION_THRESHOLD_PCT: f64 = 75.0;
}

/// Thresholds for the descriptive label helpers
pub mod labels {
    /// Below this hydration the dough handles as stiff (%)
    pub const HYDRATION_STIFF_BELOW_PCT: f64 = 65.0;

    /// Up to this hydration the dough handles as standard (%)
    pub const HYDRATION_STANDARD_MAX_PCT: f64 = 70.0;

    /// Up to this hydration the dough handles as supple (%)
    pub const HYDRATION_SUPPLE_MAX_PCT: f64 = 75.0;

    /// Up to this hydration the dough handles as slack; above is batter-like (%)
    pub const HYDRATION_SLACK_MAX_PCT: f64 = 85.0;

    /// Below this multiplier fermentation reads as slow and flavor-building
    pub const SPEED_SLOW_BELOW: f64 = 0.8;

    /// Up to this multiplier fermentation reads as standard
    pub const SPEED_STANDARD_MAX: f64 = 1.2;

    /// Below this water temperature, advise ice water (°C)
    pub const WATER_ICE_BELOW_CELSIUS: i32 = 10;

    /// Below this water temperature, advise cool tap water (°C)
    pub const WATER_COOL_BELOW_CELSIUS: i32 = 20;

    /// Below this water temperature, advise room-temperature water (°C)
    pub const WATER_ROOM_BELOW_CELSIUS: i32 = 30;
}

/// Unit conversion factors
pub mod units {
    /// Grams per avoirdupois ounce
    pub const GRAMS_PER_OUNCE: f64 = 28.349_523_125;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: u32 = 60;
}
