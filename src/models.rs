// ABOUTME: Data models for the recipe engine: inputs, masses, timing, and schedule steps
// ABOUTME: Defines RecipeInputs, RecipeOutput, Preferment, FinalDough, Step, and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

use serde::{Deserialize, Serialize};

/// Leavening method: how the yeast gets into the dough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// All ingredients mixed in one stage
    #[default]
    Direct,
    /// Stiff Italian preferment (50% hydration), mild and nutty
    Biga,
    /// Liquid French preferment (100% hydration), extensible and sweet
    Poolish,
}

impl Method {
    /// Whether this method ferments part of the flour in advance
    #[must_use]
    pub const fn is_indirect(&self) -> bool {
        !matches!(self, Self::Direct)
    }

    /// Display name of the preferment, capitalized for step titles
    #[must_use]
    pub const fn preferment_name(&self) -> &'static str {
        match self {
            Self::Direct => "none",
            Self::Biga => "Biga",
            Self::Poolish => "Poolish",
        }
    }
}

/// Mixer type; affects friction heating and kneading time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mixer {
    /// Mixing and kneading by hand
    #[default]
    Hand,
    /// Stand mixer with a dough hook
    Kitchenaid,
}

/// Where the preferment matures; only meaningful for indirect methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefermentStorage {
    /// Refrigerated maturation, slow and capped
    Fridge,
    /// Counter-top maturation at ambient temperature
    #[default]
    Room,
}

/// Process phase a schedule step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    /// Advance work before mixing day
    Prep,
    /// Combining and developing the dough
    Mix,
    /// First rise, including folds
    Bulk,
    /// Dividing, pre-shaping, shaping
    Shape,
    /// Final rise of the shaped loaf
    Proof,
    /// Oven work and cooling
    Bake,
}

/// Caller-supplied inputs, immutable for the duration of one calculation
///
/// The engine does not enforce the documented ranges; every formula clamps
/// its own output instead, so out-of-range inputs saturate rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeInputs {
    /// Leavening method
    pub method: Method,
    /// Total flour mass in grams; expected range 100-2000
    pub total_flour: f64,
    /// Target hydration as a baker's percentage; expected range 60-90
    pub target_hydration: f64,
    /// Mixer type
    pub mixer: Mixer,
    /// Ambient temperature in °C
    pub room_temp: f64,
    /// Fermentation speed multiplier in [0.5, 2.0]; 1.0 is standard
    pub fermentation_speed: f64,
    /// Preferment maturation location; ignored for the direct method
    pub preferment_storage: PrefermentStorage,
}

impl Default for RecipeInputs {
    fn default() -> Self {
        Self {
            method: Method::Direct,
            total_flour: 500.0,
            target_hydration: 70.0,
            mixer: Mixer::Hand,
            room_temp: 22.0,
            fermentation_speed: 1.0,
            preferment_storage: PrefermentStorage::Room,
        }
    }
}

/// Masses fermented in advance for indirect methods (grams)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferment {
    /// Preferment flour, already rounded to whole grams
    pub flour: f64,
    /// Preferment water, rounded to whole grams
    pub water: f64,
    /// Preferment yeast, rounded to one decimal
    pub yeast: f64,
}

/// The dough actually mixed on baking day, after any preferment is folded in (grams)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalDough {
    /// Remaining flour after subtracting the preferment's share
    pub flour: f64,
    /// Remaining water after subtracting the preferment's share
    pub water: f64,
    /// Salt for the whole batch; never goes into the preferment
    pub salt: f64,
    /// Remaining yeast after subtracting the preferment's share, floored at 0
    pub yeast: f64,
}

/// Complete calculation result: masses plus timing estimates
///
/// Replaced wholesale on every recalculation; identical inputs always
/// produce a value-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeOutput {
    /// Total flour across preferment and final dough (grams)
    pub flour_total: f64,
    /// Total water across preferment and final dough (grams)
    pub water_total: f64,
    /// Salt (grams)
    pub salt: f64,
    /// Total yeast across preferment and final dough (grams)
    pub yeast: f64,
    /// Present iff the method is indirect
    pub preferment: Option<Preferment>,
    /// Baking-day dough composition
    pub final_dough: FinalDough,
    /// Target mixing-water temperature (°C), clamped to [0, 40]
    pub calculated_water_temp: i32,
    /// Estimated bulk fermentation (minutes)
    pub estimated_bulk_time: u32,
    /// Estimated final proof (minutes), clamped to [30, 120]
    pub estimated_proof_time: u32,
    /// Preferment maturation (minutes); 0 for the direct method
    pub preferment_time: u32,
    /// Total elapsed process time (minutes); oven preheat excluded as it
    /// overlaps the proof window
    pub total_time: u32,
}

/// One entry in the generated bake schedule
///
/// Ids are sequential within a single generation pass and are not durable
/// keys across regenerations with different inputs. Steps carry no
/// calculation state; countdowns live in [`crate::timers::StepTimer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position in the schedule, starting at 1
    pub id: u32,
    /// Short imperative title
    pub title: String,
    /// What to do and what to look for
    pub description: String,
    /// Whether skipping or mistiming this step risks the bake
    pub critical: bool,
    /// Duration in minutes; absent for untimed actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Process phase
    pub category: StepCategory,
}

impl Step {
    /// Create an untimed, non-critical step
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: StepCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            critical: false,
            duration: None,
            category,
        }
    }

    /// Set the duration in minutes
    #[must_use]
    pub const fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Mark the step as critical
    #[must_use]
    pub const fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}
