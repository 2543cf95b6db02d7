// ABOUTME: Scalar calculators and the recipe aggregator for the bread engine
// ABOUTME: Water temperature, yeast, preferment, fermentation times, and mass totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Recipe Calculator Module
//!
//! Pure functions that turn baker inputs into ingredient masses and timing
//! estimates. Every function here is deterministic and infallible: formulas
//! that could diverge under extreme inputs clamp their outputs (water
//! temperature to [0, 40] °C, proof time to its configured band, fridge
//! preferment maturation to method-specific caps) instead of returning
//! errors. Calling any of them twice with identical inputs yields identical
//! results, so callers can recompute from scratch on every input change.
//!
//! # Model References
//!
//! - Rule of 3 / Rule of 4 water temperature: Suas, M. (2008).
//!   *Advanced Bread and Pastry*, Ch. 3.
//! - Q10-style fermentation kinetics: Cauvain, S.P. & Young, L.S. (2007).
//!   *Technology of Breadmaking*, Ch. 3.
//! - Preferment composition: Hamelman, J. (2012). *Bread*, Ch. 5.

use crate::config::{
    EngineConfig, FermentationConfig, FrictionConfig, PrefermentConfig, ScheduleConfig,
    YeastConfig,
};
use crate::models::{
    FinalDough, Method, Mixer, Preferment, PrefermentStorage, RecipeInputs, RecipeOutput,
};
use tracing::debug;

/// Round to one decimal place, half away from zero
#[must_use]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Q10-style temperature factor on fermentation time
///
/// `2^(-(temp - reference) / step)`: each `step` °C above the reference
/// halves fermentation time, each `step` °C below doubles it.
#[must_use]
fn temperature_factor(temp_celsius: f64, config: &FermentationConfig) -> f64 {
    2_f64.powf(-(temp_celsius - config.reference_temp_celsius) / config.q10_step_celsius)
}

/// Calculate the friction factor of mixing (°C)
///
/// Base friction depends on the mixer; dough wetter than the high-hydration
/// threshold (strict inequality) lubricates the mix and reduces friction,
/// floored at zero. Exactly at the threshold no reduction applies.
#[must_use]
pub fn calculate_friction(mixer: Mixer, hydration_pct: f64, config: &FrictionConfig) -> f64 {
    let base = match mixer {
        Mixer::Hand => config.hand_celsius,
        Mixer::Kitchenaid => config.machine_celsius,
    };

    if hydration_pct > config.high_hydration_threshold_pct {
        (base - config.high_hydration_reduction_celsius).max(0.0)
    } else {
        base
    }
}

/// Calculate the target mixing-water temperature (°C)
///
/// Rule of 3 for the direct method (room, flour, friction contribute):
/// `water = DDT*3 - room - flour - friction`. Rule of 4 for preferment
/// methods adds the preferment itself as a fourth contributor, at fridge
/// temperature when refrigerated, otherwise at ambient. Flour is assumed
/// to sit at ambient temperature.
///
/// The result is rounded to the nearest integer and clamped into the
/// configured band ([0, 40] by default): real mixing water cannot be colder
/// than ice or hotter than scalding, so extreme ambient temperatures
/// saturate rather than produce unusable demands.
#[must_use]
pub fn calculate_water_temp(inputs: &RecipeInputs, config: &EngineConfig) -> i32 {
    let friction = calculate_friction(inputs.mixer, inputs.target_hydration, &config.friction);
    let ddt = config.water_temp.ddt_celsius;
    let flour_temp = inputs.room_temp;

    let raw = if inputs.method.is_indirect() {
        let preferment_temp = match inputs.preferment_storage {
            PrefermentStorage::Fridge => config.water_temp.fridge_celsius,
            PrefermentStorage::Room => inputs.room_temp,
        };
        ddt * crate::constants::temperature::RULE_OF_FOUR
            - inputs.room_temp
            - flour_temp
            - friction
            - preferment_temp
    } else {
        ddt * crate::constants::temperature::RULE_OF_THREE
            - inputs.room_temp
            - flour_temp
            - friction
    };

    raw.round()
        .clamp(config.water_temp.min_celsius, config.water_temp.max_celsius) as i32
}

/// Calculate total fresh yeast (grams, one decimal)
///
/// The yeast percentage scales linearly with the fermentation-speed
/// multiplier (1.5% at standard speed). Above the high-hydration threshold
/// (strict inequality) the percentage drops 10%: wetter dough ferments
/// faster and needs less yeast to hold the same schedule.
#[must_use]
pub fn calculate_yeast(
    total_flour_g: f64,
    speed_multiplier: f64,
    hydration_pct: f64,
    config: &YeastConfig,
) -> f64 {
    let mut pct = config.base_pct * speed_multiplier;
    if hydration_pct > config.high_hydration_threshold_pct {
        pct *= config.high_hydration_factor;
    }

    round1(total_flour_g * pct / 100.0)
}

/// Calculate preferment composition; `None` for the direct method
///
/// Both biga and poolish take the same share of total flour (30% by
/// default) but differ in hydration (50% stiff vs 100% liquid) and in yeast
/// share (1.0% vs 0.1% of preferment flour).
#[must_use]
pub fn calculate_preferment(
    method: Method,
    total_flour_g: f64,
    config: &PrefermentConfig,
) -> Option<Preferment> {
    let (hydration_pct, yeast_pct) = match method {
        Method::Direct => return None,
        Method::Biga => (config.biga_hydration_pct, config.biga_yeast_pct),
        Method::Poolish => (config.poolish_hydration_pct, config.poolish_yeast_pct),
    };

    let flour = (total_flour_g * config.flour_share).round();
    let water = (flour * hydration_pct / 100.0).round();
    let yeast = round1(flour * yeast_pct / 100.0);

    Some(Preferment {
        flour,
        water,
        yeast,
    })
}

/// Hydration multiplier on fermentation time
///
/// Continuous at the baseline (factor 1.0 at 65% hydration by default) and
/// monotonic on each side: drier dough ferments slower, capped at a 15%
/// slowdown; wetter dough ferments faster, capped at a 30% speedup.
#[must_use]
pub fn calculate_hydration_factor(hydration_pct: f64, config: &FermentationConfig) -> f64 {
    let baseline = config.baseline_hydration_pct;
    if hydration_pct <= baseline {
        1.0 + ((baseline - hydration_pct) * config.dry_slowdown_per_pct).min(config.dry_slowdown_cap)
    } else {
        1.0 - ((hydration_pct - baseline) * config.wet_speedup_per_pct).min(config.wet_speedup_cap)
    }
}

/// Estimated bulk fermentation time (minutes)
///
/// `base * tempFactor * hydrationFactor * (1 / speed)`. There is no upper
/// clamp: a very cold room legitimately gets an arbitrarily long bulk
/// window (only proof time is clamped downstream).
#[must_use]
pub fn calculate_bulk_time(
    room_temp_c: f64,
    speed_multiplier: f64,
    hydration_pct: f64,
    config: &FermentationConfig,
) -> u32 {
    let temp_factor = temperature_factor(room_temp_c, config);
    let hydration_factor = calculate_hydration_factor(hydration_pct, config);
    let speed_factor = 1.0 / speed_multiplier;

    (config.base_bulk_minutes * temp_factor * hydration_factor * speed_factor)
        .round()
        .max(0.0) as u32
}

/// Estimated final proof time (minutes), clamped to [30, 120] by default
#[must_use]
pub fn calculate_proof_time(bulk_minutes: u32, config: &FermentationConfig) -> u32 {
    (f64::from(bulk_minutes) * config.proof_ratio)
        .round()
        .clamp(config.proof_min_minutes, config.proof_max_minutes) as u32
}

/// Estimated preferment maturation time (minutes); 0 for the direct method
///
/// Uses the same Q10 temperature model as bulk fermentation against the
/// storage temperature (fridge or ambient), applied to a base time
/// calibrated for biga at the reference temperature. The yeast factor
/// `1 + log10(biga% / method%) * weight` accounts for poolish's 10x lower
/// yeast share (1.0 for biga, 1.5 for poolish). Refrigeration plateaus
/// fermentation rather than following Q10 indefinitely, so fridge storage
/// caps the result at a method-specific ceiling before rounding.
#[must_use]
pub fn calculate_preferment_time(
    method: Method,
    room_temp_c: f64,
    storage: PrefermentStorage,
    config: &EngineConfig,
) -> u32 {
    let (method_yeast_pct, fridge_cap) = match method {
        Method::Direct => return 0,
        Method::Biga => (
            config.preferment.biga_yeast_pct,
            config.preferment.biga_fridge_cap_minutes,
        ),
        Method::Poolish => (
            config.preferment.poolish_yeast_pct,
            config.preferment.poolish_fridge_cap_minutes,
        ),
    };

    let storage_temp = match storage {
        PrefermentStorage::Fridge => config.water_temp.fridge_celsius,
        PrefermentStorage::Room => room_temp_c,
    };

    let temp_factor = temperature_factor(storage_temp, &config.fermentation);
    let yeast_factor = 1.0
        + (config.preferment.biga_yeast_pct / method_yeast_pct).log10()
            * config.preferment.yeast_log_weight;

    let mut raw = config.preferment.base_time_minutes * temp_factor * yeast_factor;
    if storage == PrefermentStorage::Fridge {
        raw = raw.min(fridge_cap);
    }

    raw.round().max(0.0) as u32
}

/// Total elapsed process time (minutes)
///
/// Monotone sum of the preferment maturation (indirect methods only), the
/// autolyse rest (high hydration only), kneading, bulk, pre-shape rest,
/// shaping, proof, both bake phases, and cooling. Oven preheat is
/// deliberately excluded: it overlaps the proof window.
#[must_use]
pub fn calculate_total_time(
    bulk_minutes: u32,
    proof_minutes: u32,
    preferment_minutes: u32,
    mixer: Mixer,
    high_hydration: bool,
    indirect: bool,
    config: &ScheduleConfig,
) -> u32 {
    let mut total = 0;

    if indirect {
        total += preferment_minutes;
    }
    if high_hydration {
        total += config.autolyse_minutes;
    }
    total += match mixer {
        Mixer::Hand => config.hand_mix_minutes,
        Mixer::Kitchenaid => config.machine_mix_minutes,
    };
    total += bulk_minutes;
    total += config.preshape_rest_minutes;
    total += config.final_shape_minutes;
    total += proof_minutes;
    total += config.covered_bake_minutes;
    total += config.uncovered_bake_minutes;
    total += config.cooling_minutes;

    total
}

/// Calculate a complete, internally consistent recipe
///
/// Orchestrates the scalar calculators in dependency order and enforces
/// mass conservation: `final_dough.flour + preferment.flour == flour_total`
/// exactly, and the analogous water identity (both holds by construction,
/// since final-dough masses are computed by subtraction from the rounded
/// whole-batch totals). Total yeast below the preferment's own share floors
/// the final-dough yeast at zero after one-decimal rounding.
///
/// Side-effect-free and referentially transparent: identical inputs always
/// produce a value-identical [`RecipeOutput`].
#[must_use]
pub fn calculate_recipe(inputs: &RecipeInputs, config: &EngineConfig) -> RecipeOutput {
    let flour_total = inputs.total_flour;
    let water_total = (flour_total * inputs.target_hydration / 100.0).round();
    let salt = (flour_total * config.dough.salt_pct / 100.0).round();
    let yeast_total = calculate_yeast(
        flour_total,
        inputs.fermentation_speed,
        inputs.target_hydration,
        &config.yeast,
    );

    let preferment = calculate_preferment(inputs.method, flour_total, &config.preferment);

    let final_dough = match &preferment {
        Some(pf) => FinalDough {
            flour: flour_total - pf.flour,
            water: water_total - pf.water,
            salt,
            yeast: round1(yeast_total - pf.yeast).max(0.0),
        },
        None => FinalDough {
            flour: flour_total,
            water: water_total,
            salt,
            yeast: yeast_total,
        },
    };

    let calculated_water_temp = calculate_water_temp(inputs, config);
    let estimated_bulk_time = calculate_bulk_time(
        inputs.room_temp,
        inputs.fermentation_speed,
        inputs.target_hydration,
        &config.fermentation,
    );
    let estimated_proof_time = calculate_proof_time(estimated_bulk_time, &config.fermentation);
    let preferment_time = calculate_preferment_time(
        inputs.method,
        inputs.room_temp,
        inputs.preferment_storage,
        config,
    );

    let high_hydration = inputs.target_hydration > config.schedule.high_hydration_threshold_pct;
    let total_time = calculate_total_time(
        estimated_bulk_time,
        estimated_proof_time,
        preferment_time,
        inputs.mixer,
        high_hydration,
        inputs.method.is_indirect(),
        &config.schedule,
    );

    debug!(
        method = ?inputs.method,
        flour_total,
        water_total,
        water_temp = calculated_water_temp,
        bulk = estimated_bulk_time,
        proof = estimated_proof_time,
        preferment = preferment_time,
        total = total_time,
        "recipe calculated"
    );

    RecipeOutput {
        flour_total,
        water_total,
        salt,
        yeast: yeast_total,
        preferment,
        final_dough,
        calculated_water_temp,
        estimated_bulk_time,
        estimated_proof_time,
        preferment_time,
        total_time,
    }
}
