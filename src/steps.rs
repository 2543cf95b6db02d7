// ABOUTME: Schedule generation: expands a calculated recipe into ordered procedural steps
// ABOUTME: Branches on method, hydration regime, and mixer; assigns sequential step ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Step Generator Module
//!
//! Deterministic template expansion from a [`RecipeInputs`] /
//! [`RecipeOutput`] pair to an ordered bake schedule. There is no runtime
//! state machine here: regenerating with identical inputs yields an
//! identical list, and step ids are only unique within one generated list.
//! Wall-clock scheduling is the consumer's job, done by walking the list
//! and accumulating durations.

use crate::config::EngineConfig;
use crate::labels::water_temp_advice;
use crate::models::{Method, Mixer, RecipeInputs, RecipeOutput, Step, StepCategory};
use tracing::debug;

/// Ordered step list under construction; assigns ids as steps are added
struct Schedule {
    steps: Vec<Step>,
}

impl Schedule {
    const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: StepCategory,
        critical: bool,
        duration: Option<u32>,
    ) {
        let id = self.steps.len() as u32 + 1;
        self.steps.push(Step {
            id,
            title: title.into(),
            description: description.into(),
            critical,
            duration,
            category,
        });
    }
}

/// Generate the ordered bake schedule for a calculated recipe
///
/// Branches:
/// - indirect methods prepend a critical preferment-preparation step,
/// - hydration above the schedule threshold swaps plain mixing for
///   autolyse, salt incorporation, and bassinage, and splits the bulk
///   window around evenly spaced coil folds,
/// - otherwise one combine step (worded for direct vs preferment doughs)
///   and a mixer-specific kneading step precede a single bulk rise.
///
/// The tail (pre-shape, shape, proof, preheat, score, bakes, cooling) is
/// identical across branches.
#[must_use]
pub fn generate_steps(
    inputs: &RecipeInputs,
    output: &RecipeOutput,
    config: &EngineConfig,
) -> Vec<Step> {
    let mut schedule = Schedule::new();
    let high_hydration = inputs.target_hydration > config.schedule.high_hydration_threshold_pct;
    let water_advice = water_temp_advice(output.calculated_water_temp);

    if inputs.method.is_indirect() {
        if let Some(pf) = &output.preferment {
            schedule.add(
                format!("Prepare the {}", inputs.method.preferment_name()),
                format!(
                    "Mix {:.0} g flour, {:.0} g water, and {:.1} g yeast. Cover and let \
                     mature 8-16 h until domed and aromatic.",
                    pf.flour, pf.water, pf.yeast
                ),
                StepCategory::Prep,
                true,
                Some(output.preferment_time),
            );
        }
    }

    if high_hydration {
        schedule.add(
            "Autolyse",
            format!(
                "Combine the final-dough flour with most of the water at \
                 {} C ({}). Cover and rest; no kneading yet.",
                output.calculated_water_temp, water_advice
            ),
            StepCategory::Mix,
            false,
            Some(config.schedule.autolyse_minutes),
        );
        schedule.add(
            "Add Salt & Yeast",
            format!(
                "Sprinkle {:.0} g salt and {:.1} g yeast over the dough with a splash \
                 of the reserved water. Squeeze and fold until fully incorporated.",
                output.final_dough.salt, output.final_dough.yeast
            ),
            StepCategory::Mix,
            false,
            None,
        );
        schedule.add(
            "Bassinage",
            "Work the remaining water in a little at a time, waiting for each \
             addition to absorb before the next. Stop when the dough turns glossy \
             and starts to slacken.",
            StepCategory::Mix,
            false,
            None,
        );
    } else {
        let combine_description = if inputs.method.is_indirect() {
            format!(
                "Break the mature preferment into the {} C water ({}), then add the \
                 remaining flour, {:.0} g salt, and {:.1} g yeast.",
                output.calculated_water_temp, water_advice, output.final_dough.salt,
                output.final_dough.yeast
            )
        } else {
            format!(
                "Dissolve {:.1} g yeast in the {} C water ({}), then add the flour \
                 and {:.0} g salt.",
                output.final_dough.yeast,
                output.calculated_water_temp,
                water_advice,
                output.final_dough.salt
            )
        };
        schedule.add(
            "Combine the Dough",
            combine_description,
            StepCategory::Mix,
            false,
            None,
        );

        match inputs.mixer {
            Mixer::Hand => schedule.add(
                "Knead by Hand",
                "Knead on the bench until smooth and elastic; the dough should pass \
                 the windowpane test.",
                StepCategory::Mix,
                false,
                Some(config.schedule.hand_mix_minutes),
            ),
            Mixer::Kitchenaid => schedule.add(
                "Machine Knead",
                "Mix on low with the dough hook until the dough clears the bowl \
                 sides and passes the windowpane test.",
                StepCategory::Mix,
                false,
                Some(config.schedule.machine_mix_minutes),
            ),
        }
    }

    let bulk = output.estimated_bulk_time;
    if high_hydration {
        let fold_count = config.schedule.coil_fold_count;
        let fold_interval =
            (f64::from(bulk) / f64::from(fold_count + 1)).round() as u32;

        schedule.add(
            "Begin Bulk Fermentation",
            "Transfer the dough to a lightly oiled container and cover. Keep it at \
             room temperature between folds.",
            StepCategory::Bulk,
            false,
            Some(fold_interval),
        );
        for fold in 1..=fold_count {
            schedule.add(
                format!("Coil Fold {fold} of {fold_count}"),
                "With wet hands, lift the dough from the middle and let the ends \
                 tuck under themselves. Rotate and repeat, then cover again.",
                StepCategory::Bulk,
                false,
                Some(fold_interval),
            );
        }
        let remainder = bulk.saturating_sub(fold_interval * (fold_count + 1));
        schedule.add(
            "Finish Bulk Fermentation",
            "Leave the dough untouched until it has roughly doubled, with large \
             bubbles at the edges.",
            StepCategory::Bulk,
            false,
            if remainder > 0 { Some(remainder) } else { None },
        );
    } else {
        schedule.add(
            "Bulk Fermentation",
            "Cover and let rise at room temperature until roughly doubled and \
             airy.",
            StepCategory::Bulk,
            false,
            Some(bulk),
        );
        schedule.add(
            "Stretch and Fold (Optional)",
            "If the dough spreads flat, give it one round of stretch and folds \
             during the first hour of the rise.",
            StepCategory::Bulk,
            false,
            None,
        );
    }

    schedule.add(
        "Pre-shape and Rest",
        "Turn the dough out, shape it into a loose round with a bench scraper, \
         and leave it uncovered on the bench.",
        StepCategory::Shape,
        false,
        Some(config.schedule.preshape_rest_minutes),
    );
    schedule.add(
        "Final Shape",
        "Shape into a tight batard or boule and place seam side up in a floured \
         banneton.",
        StepCategory::Shape,
        true,
        None,
    );
    schedule.add(
        "Final Proof",
        "Cover and proof until the dough springs back slowly from a gentle poke.",
        StepCategory::Proof,
        false,
        Some(output.estimated_proof_time),
    );
    schedule.add(
        "Preheat the Oven",
        "Start during the proof: oven to 245 C with the dutch oven and lid \
         inside.",
        StepCategory::Bake,
        true,
        Some(config.schedule.oven_preheat_minutes),
    );
    schedule.add(
        "Score and Load",
        "Flip the loaf onto parchment, score decisively with a lame, and lower \
         it into the hot dutch oven.",
        StepCategory::Bake,
        true,
        None,
    );
    schedule.add(
        "Covered Bake",
        "Bake with the lid on so the loaf steams itself and springs fully.",
        StepCategory::Bake,
        false,
        Some(config.schedule.covered_bake_minutes),
    );
    schedule.add(
        "Uncovered Bake",
        "Remove the lid and bake until the crust is deep brown.",
        StepCategory::Bake,
        false,
        Some(config.schedule.uncovered_bake_minutes),
    );
    schedule.add(
        "Cool Completely",
        "Cool on a rack before slicing; the crumb is still setting.",
        StepCategory::Bake,
        true,
        Some(config.schedule.cooling_minutes),
    );

    debug!(
        step_count = schedule.steps.len(),
        high_hydration,
        method = ?inputs.method,
        "schedule generated"
    );

    schedule.steps
}
