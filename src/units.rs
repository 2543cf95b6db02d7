// ABOUTME: Unit conversion and display formatting helpers
// ABOUTME: Grams/ounces, Celsius/Fahrenheit, and minute-based duration formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

use crate::constants::units::{GRAMS_PER_OUNCE, MINUTES_PER_HOUR};

/// Convert grams to avoirdupois ounces
#[must_use]
pub fn grams_to_ounces(grams: f64) -> f64 {
    grams / GRAMS_PER_OUNCE
}

/// Convert avoirdupois ounces to grams
#[must_use]
pub fn ounces_to_grams(ounces: f64) -> f64 {
    ounces * GRAMS_PER_OUNCE
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Format a duration in minutes for display
///
/// Under an hour: `45 min`. Whole hours: `2h`. Mixed: `1h 30m`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} min");
    }

    let hours = minutes / MINUTES_PER_HOUR;
    let rest = minutes % MINUTES_PER_HOUR;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}
