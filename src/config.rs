// ABOUTME: Engine configuration with defaults from the constants module
// ABOUTME: Supports LEVAIN_* env overrides, validation, and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Engine Configuration Module
//!
//! Every tunable the calculators consume lives here, grouped by concern.
//! Defaults come from [`crate::constants`]; `LEVAIN_*` environment variables
//! override individual values; `validate` rejects configurations the
//! formulas cannot make sense of.

use crate::constants::{
    dough, durations, fermentation, friction, preferment, temperature, yeast,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Friction factor configuration
///
/// The high-hydration threshold here and the one in [`YeastConfig`] default
/// to the same value but are deliberately independent knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrictionConfig {
    /// Hand-mixing friction (°C)
    pub hand_celsius: f64,
    /// Stand-mixer friction (°C)
    pub machine_celsius: f64,
    /// Hydration above which friction drops (%, exclusive boundary)
    pub high_hydration_threshold_pct: f64,
    /// Friction reduction above the threshold (°C), floored at zero friction
    pub high_hydration_reduction_celsius: f64,
}

/// Water temperature configuration (Rule of 3 / Rule of 4)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTempConfig {
    /// Desired dough temperature (°C)
    pub ddt_celsius: f64,
    /// Assumed fridge temperature for refrigerated preferments (°C)
    pub fridge_celsius: f64,
    /// Lower clamp on mixing water (°C)
    pub min_celsius: f64,
    /// Upper clamp on mixing water (°C)
    pub max_celsius: f64,
}

/// Yeast dosing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YeastConfig {
    /// Yeast baker's percentage at standard fermentation speed
    pub base_pct: f64,
    /// Hydration above which yeast is reduced (%, exclusive boundary)
    pub high_hydration_threshold_pct: f64,
    /// Multiplier on the yeast percentage above the threshold
    pub high_hydration_factor: f64,
}

/// Final dough composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoughConfig {
    /// Salt baker's percentage
    pub salt_pct: f64,
}

/// Preferment composition and maturation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefermentConfig {
    /// Share of total flour fermented in advance
    pub flour_share: f64,
    /// Biga hydration (%)
    pub biga_hydration_pct: f64,
    /// Poolish hydration (%)
    pub poolish_hydration_pct: f64,
    /// Biga yeast as a percentage of preferment flour
    pub biga_yeast_pct: f64,
    /// Poolish yeast as a percentage of preferment flour
    pub poolish_yeast_pct: f64,
    /// Maturation time at the DDT, calibrated for biga (minutes)
    pub base_time_minutes: f64,
    /// Weight on the log10 yeast-share ratio in the maturation model
    pub yeast_log_weight: f64,
    /// Fridge maturation cap for biga (minutes)
    pub biga_fridge_cap_minutes: f64,
    /// Fridge maturation cap for poolish (minutes)
    pub poolish_fridge_cap_minutes: f64,
}

/// Bulk and proof fermentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationConfig {
    /// Bulk time at the reference temperature, standard speed, baseline hydration (minutes)
    pub base_bulk_minutes: f64,
    /// Q10 reference temperature (°C); equals the DDT
    pub reference_temp_celsius: f64,
    /// Temperature step that halves/doubles fermentation time (°C)
    pub q10_step_celsius: f64,
    /// Hydration at which the hydration factor is exactly 1.0 (%)
    pub baseline_hydration_pct: f64,
    /// Slowdown per point of hydration below baseline
    pub dry_slowdown_per_pct: f64,
    /// Cap on the dry-dough slowdown
    pub dry_slowdown_cap: f64,
    /// Speedup per point of hydration above baseline
    pub wet_speedup_per_pct: f64,
    /// Cap on the wet-dough speedup
    pub wet_speedup_cap: f64,
    /// Final proof as a fraction of bulk time
    pub proof_ratio: f64,
    /// Lower clamp on proof time (minutes)
    pub proof_min_minutes: f64,
    /// Upper clamp on proof time (minutes)
    pub proof_max_minutes: f64,
}

/// Schedule generation knobs: fixed step durations and the regime boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Hydration above which the schedule switches to autolyse, bassinage,
    /// and coil folds (%, exclusive boundary)
    pub high_hydration_threshold_pct: f64,
    /// Autolyse rest for high-hydration dough
    pub autolyse_minutes: u32,
    /// Hand kneading
    pub hand_mix_minutes: u32,
    /// Stand-mixer kneading
    pub machine_mix_minutes: u32,
    /// Bench rest before final shaping
    pub preshape_rest_minutes: u32,
    /// Final shaping
    pub final_shape_minutes: u32,
    /// Oven preheat; overlaps proof, excluded from total time
    pub oven_preheat_minutes: u32,
    /// Covered (steam) bake phase
    pub covered_bake_minutes: u32,
    /// Uncovered (crust) bake phase
    pub uncovered_bake_minutes: u32,
    /// Cooling before slicing
    pub cooling_minutes: u32,
    /// Coil folds across a high-hydration bulk window
    pub coil_fold_count: u32,
}

/// Main engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub friction: FrictionConfig,
    pub water_temp: WaterTempConfig,
    pub yeast: YeastConfig,
    pub dough: DoughConfig,
    pub preferment: PrefermentConfig,
    pub fermentation: FermentationConfig,
    pub schedule: ScheduleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            friction: Self::default_friction_config(),
            water_temp: Self::default_water_temp_config(),
            yeast: Self::default_yeast_config(),
            dough: Self::default_dough_config(),
            preferment: Self::default_preferment_config(),
            fermentation: Self::default_fermentation_config(),
            schedule: Self::default_schedule_config(),
        }
    }
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loads from environment on first use; falls back to defaults when the
    /// environment contains invalid values.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparseable
    /// value or the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a value would make a formula degenerate
    /// (inverted clamps, zero kinetics step, out-of-range shares).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.water_temp.min_celsius >= self.water_temp.max_celsius {
            return Err(ConfigError::InvalidRange(
                "water_temp.min_celsius must be < water_temp.max_celsius",
            ));
        }

        if self.friction.hand_celsius < 0.0 || self.friction.machine_celsius < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "friction contributions must be non-negative",
            ));
        }

        if self.yeast.base_pct <= 0.0 || self.yeast.base_pct > 10.0 {
            return Err(ConfigError::ValueOutOfRange(
                "yeast.base_pct must be within (0, 10] percent",
            ));
        }
        if !(0.0..=1.0).contains(&self.yeast.high_hydration_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "yeast.high_hydration_factor must be within [0, 1]",
            ));
        }

        if self.dough.salt_pct < 0.0 || self.dough.salt_pct > 5.0 {
            return Err(ConfigError::ValueOutOfRange(
                "dough.salt_pct must be within [0, 5] percent",
            ));
        }

        if self.preferment.flour_share <= 0.0 || self.preferment.flour_share >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "preferment.flour_share must be within (0, 1)",
            ));
        }
        if self.preferment.biga_yeast_pct <= 0.0 || self.preferment.poolish_yeast_pct <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "preferment yeast percentages must be positive",
            ));
        }
        if self.preferment.biga_fridge_cap_minutes <= 0.0
            || self.preferment.poolish_fridge_cap_minutes <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "preferment fridge caps must be positive",
            ));
        }

        if self.fermentation.q10_step_celsius <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fermentation.q10_step_celsius must be positive",
            ));
        }
        if self.fermentation.base_bulk_minutes <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fermentation.base_bulk_minutes must be positive",
            ));
        }
        if self.fermentation.proof_min_minutes >= self.fermentation.proof_max_minutes {
            return Err(ConfigError::InvalidRange(
                "fermentation.proof_min_minutes must be < proof_max_minutes",
            ));
        }
        if !(0.0..1.0).contains(&self.fermentation.dry_slowdown_cap)
            || !(0.0..1.0).contains(&self.fermentation.wet_speedup_cap)
        {
            return Err(ConfigError::ValueOutOfRange(
                "fermentation hydration caps must be within [0, 1)",
            ));
        }

        if self.schedule.coil_fold_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "schedule.coil_fold_count must be at least 1",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        fn parse<T: std::str::FromStr>(name: &str, val: &str) -> Result<T, ConfigError> {
            val.parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))
        }

        if let Ok(val) = std::env::var("LEVAIN_FRICTION_HAND") {
            self.friction.hand_celsius = parse("LEVAIN_FRICTION_HAND", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_FRICTION_MACHINE") {
            self.friction.machine_celsius = parse("LEVAIN_FRICTION_MACHINE", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_DDT_CELSIUS") {
            self.water_temp.ddt_celsius = parse("LEVAIN_DDT_CELSIUS", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_YEAST_BASE_PCT") {
            self.yeast.base_pct = parse("LEVAIN_YEAST_BASE_PCT", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_SALT_PCT") {
            self.dough.salt_pct = parse("LEVAIN_SALT_PCT", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_PREFERMENT_FLOUR_SHARE") {
            self.preferment.flour_share = parse("LEVAIN_PREFERMENT_FLOUR_SHARE", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_BASE_BULK_MINUTES") {
            self.fermentation.base_bulk_minutes = parse("LEVAIN_BASE_BULK_MINUTES", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_PROOF_MIN_MINUTES") {
            self.fermentation.proof_min_minutes = parse("LEVAIN_PROOF_MIN_MINUTES", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_PROOF_MAX_MINUTES") {
            self.fermentation.proof_max_minutes = parse("LEVAIN_PROOF_MAX_MINUTES", &val)?;
        }

        if let Ok(val) = std::env::var("LEVAIN_AUTOLYSE_MINUTES") {
            self.schedule.autolyse_minutes = parse("LEVAIN_AUTOLYSE_MINUTES", &val)?;
        }

        Ok(self)
    }

    /// Create default friction configuration
    const fn default_friction_config() -> FrictionConfig {
        FrictionConfig {
            hand_celsius: friction::HAND_CELSIUS,
            machine_celsius: friction::MACHINE_CELSIUS,
            high_hydration_threshold_pct: friction::HIGH_HYDRATION_THRESHOLD_PCT,
            high_hydration_reduction_celsius: friction::HIGH_HYDRATION_REDUCTION_CELSIUS,
        }
    }

    /// Create default water temperature configuration
    const fn default_water_temp_config() -> WaterTempConfig {
        WaterTempConfig {
            ddt_celsius: temperature::DDT_CELSIUS,
            fridge_celsius: temperature::FRIDGE_CELSIUS,
            min_celsius: temperature::WATER_TEMP_MIN_CELSIUS,
            max_celsius: temperature::WATER_TEMP_MAX_CELSIUS,
        }
    }

    /// Create default yeast configuration
    const fn default_yeast_config() -> YeastConfig {
        YeastConfig {
            base_pct: yeast::BASE_PCT,
            high_hydration_threshold_pct: yeast::HIGH_HYDRATION_THRESHOLD_PCT,
            high_hydration_factor: yeast::HIGH_HYDRATION_FACTOR,
        }
    }

    /// Create default dough configuration
    const fn default_dough_config() -> DoughConfig {
        DoughConfig {
            salt_pct: dough::SALT_PCT,
        }
    }

    /// Create default preferment configuration
    const fn default_preferment_config() -> PrefermentConfig {
        PrefermentConfig {
            flour_share: preferment::FLOUR_SHARE,
            biga_hydration_pct: preferment::BIGA_HYDRATION_PCT,
            poolish_hydration_pct: preferment::POOLISH_HYDRATION_PCT,
            biga_yeast_pct: preferment::BIGA_YEAST_PCT,
            poolish_yeast_pct: preferment::POOLISH_YEAST_PCT,
            base_time_minutes: preferment::BASE_TIME_MINUTES,
            yeast_log_weight: preferment::YEAST_LOG_WEIGHT,
            biga_fridge_cap_minutes: preferment::BIGA_FRIDGE_CAP_MINUTES,
            poolish_fridge_cap_minutes: preferment::POOLISH_FRIDGE_CAP_MINUTES,
        }
    }

    /// Create default fermentation configuration
    const fn default_fermentation_config() -> FermentationConfig {
        FermentationConfig {
            base_bulk_minutes: fermentation::BASE_BULK_MINUTES,
            reference_temp_celsius: temperature::DDT_CELSIUS,
            q10_step_celsius: fermentation::Q10_STEP_CELSIUS,
            baseline_hydration_pct: fermentation::BASELINE_HYDRATION_PCT,
            dry_slowdown_per_pct: fermentation::DRY_SLOWDOWN_PER_PCT,
            dry_slowdown_cap: fermentation::DRY_SLOWDOWN_CAP,
            wet_speedup_per_pct: fermentation::WET_SPEEDUP_PER_PCT,
            wet_speedup_cap: fermentation::WET_SPEEDUP_CAP,
            proof_ratio: fermentation::PROOF_RATIO,
            proof_min_minutes: fermentation::PROOF_MIN_MINUTES,
            proof_max_minutes: fermentation::PROOF_MAX_MINUTES,
        }
    }

    /// Create default schedule configuration
    const fn default_schedule_config() -> ScheduleConfig {
        ScheduleConfig {
            high_hydration_threshold_pct: durations::HIGH_HYDRATION_THRESHOLD_PCT,
            autolyse_minutes: durations::AUTOLYSE_MINUTES,
            hand_mix_minutes: durations::HAND_MIX_MINUTES,
            machine_mix_minutes: durations::MACHINE_MIX_MINUTES,
            preshape_rest_minutes: durations::PRESHAPE_REST_MINUTES,
            final_shape_minutes: durations::FINAL_SHAPE_MINUTES,
            oven_preheat_minutes: durations::OVEN_PREHEAT_MINUTES,
            covered_bake_minutes: durations::COVERED_BAKE_MINUTES,
            uncovered_bake_minutes: durations::UNCOVERED_BAKE_MINUTES,
            cooling_minutes: durations::COOLING_MINUTES,
            coil_fold_count: durations::COIL_FOLD_COUNT,
        }
    }
}
