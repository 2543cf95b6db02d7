// ABOUTME: Descriptive label helpers mapping numeric ranges to human-readable text
// ABOUTME: Hydration feel, fermentation speed feel, and water temperature advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Human-readable classifications of engine values
//!
//! Leaf helpers used by UI layers and, as plain text only, by the step
//! generator. Nothing here feeds back into any calculation.

use crate::constants::labels;

/// Describe how a dough at the given hydration handles
#[must_use]
pub fn hydration_label(hydration_pct: f64) -> &'static str {
    if hydration_pct < labels::HYDRATION_STIFF_BELOW_PCT {
        "Stiff dough, easy to handle"
    } else if hydration_pct <= labels::HYDRATION_STANDARD_MAX_PCT {
        "Standard dough"
    } else if hydration_pct <= labels::HYDRATION_SUPPLE_MAX_PCT {
        "Supple, slightly tacky dough"
    } else if hydration_pct <= labels::HYDRATION_SLACK_MAX_PCT {
        "Slack, high-hydration dough"
    } else {
        "Batter-like dough, very hard to handle"
    }
}

/// Describe what a fermentation-speed multiplier means for the bake
#[must_use]
pub fn speed_label(speed_multiplier: f64) -> &'static str {
    if speed_multiplier < labels::SPEED_SLOW_BELOW {
        "Slow, flavor-forward fermentation"
    } else if speed_multiplier <= labels::SPEED_STANDARD_MAX {
        "Standard fermentation"
    } else {
        "Fast fermentation, milder flavor"
    }
}

/// Practical advice for hitting a target water temperature
///
/// Lower-case phrasing so the text can be embedded mid-sentence in step
/// descriptions.
#[must_use]
pub fn water_temp_advice(water_temp_c: i32) -> &'static str {
    if water_temp_c < labels::WATER_ICE_BELOW_CELSIUS {
        "chill the water with a few ice cubes"
    } else if water_temp_c < labels::WATER_COOL_BELOW_CELSIUS {
        "use cool tap water"
    } else if water_temp_c < labels::WATER_ROOM_BELOW_CELSIUS {
        "use room-temperature water"
    } else {
        "use warm water"
    }
}
