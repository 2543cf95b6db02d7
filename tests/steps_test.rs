// ABOUTME: Behavior tests for bake schedule generation
// ABOUTME: Covers branch selection, step ordering, ids, durations, and critical flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

use levain::calculator::calculate_recipe;
use levain::config::EngineConfig;
use levain::models::{Method, Mixer, RecipeInputs, Step, StepCategory};
use levain::steps::generate_steps;

fn generate(inputs: &RecipeInputs) -> Vec<Step> {
    let config = EngineConfig::default();
    let recipe = calculate_recipe(inputs, &config);
    generate_steps(inputs, &recipe, &config)
}

fn titles(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn test_ids_are_sequential_from_one() {
    for inputs in [
        RecipeInputs::default(),
        RecipeInputs {
            method: Method::Poolish,
            target_hydration: 82.0,
            ..RecipeInputs::default()
        },
    ] {
        let steps = generate(&inputs);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.id, index as u32 + 1);
        }
    }
}

#[test]
fn test_standard_direct_schedule_shape() {
    let steps = generate(&RecipeInputs::default());
    let titles = titles(&steps);

    assert_eq!(titles[0], "Combine the Dough");
    assert_eq!(titles[1], "Knead by Hand");
    assert_eq!(titles[2], "Bulk Fermentation");
    assert_eq!(titles[3], "Stretch and Fold (Optional)");
    assert!(!titles.contains(&"Autolyse"));
    assert!(!titles.contains(&"Bassinage"));
    assert!(titles.iter().all(|t| !t.contains("Coil Fold")));
}

#[test]
fn test_machine_mixer_swaps_kneading_step() {
    let steps = generate(&RecipeInputs {
        mixer: Mixer::Kitchenaid,
        ..RecipeInputs::default()
    });
    let titles = titles(&steps);
    assert!(titles.contains(&"Machine Knead"));
    assert!(!titles.contains(&"Knead by Hand"));
}

#[test]
fn test_high_hydration_schedule_uses_autolyse_bassinage_and_coil_folds() {
    let steps = generate(&RecipeInputs {
        target_hydration: 80.0,
        ..RecipeInputs::default()
    });
    let titles = titles(&steps);

    assert!(titles.contains(&"Autolyse"));
    assert!(titles.contains(&"Add Salt & Yeast"));
    assert!(titles.contains(&"Bassinage"));
    assert!(titles.iter().any(|t| t.contains("Coil Fold")));
    assert!(!titles.contains(&"Knead by Hand"));
    assert!(!titles.contains(&"Bulk Fermentation"));
}

#[test]
fn test_exactly_at_threshold_stays_on_standard_branch() {
    let steps = generate(&RecipeInputs {
        target_hydration: 75.0,
        ..RecipeInputs::default()
    });
    let titles = titles(&steps);
    assert!(!titles.contains(&"Autolyse"));
    assert!(titles.contains(&"Bulk Fermentation"));
}

#[test]
fn test_coil_fold_segments_sum_to_bulk_time() {
    let inputs = RecipeInputs {
        target_hydration: 80.0,
        ..RecipeInputs::default()
    };
    let config = EngineConfig::default();
    let recipe = calculate_recipe(&inputs, &config);
    let steps = generate_steps(&inputs, &recipe, &config);

    let bulk_minutes: u32 = steps
        .iter()
        .filter(|s| s.category == StepCategory::Bulk)
        .filter_map(|s| s.duration)
        .sum();
    assert_eq!(bulk_minutes, recipe.estimated_bulk_time);

    let folds = steps
        .iter()
        .filter(|s| s.title.contains("Coil Fold"))
        .count();
    assert_eq!(folds, config.schedule.coil_fold_count as usize);
}

#[test]
fn test_indirect_methods_prepend_preferment_step() {
    for (method, title) in [
        (Method::Biga, "Prepare the Biga"),
        (Method::Poolish, "Prepare the Poolish"),
    ] {
        let inputs = RecipeInputs {
            method,
            ..RecipeInputs::default()
        };
        let config = EngineConfig::default();
        let recipe = calculate_recipe(&inputs, &config);
        let steps = generate_steps(&inputs, &recipe, &config);

        let first = &steps[0];
        assert_eq!(first.title, title);
        assert!(first.critical);
        assert_eq!(first.category, StepCategory::Prep);
        assert_eq!(first.duration, Some(recipe.preferment_time));
    }
}

#[test]
fn test_common_tail_is_present_in_order() {
    let expected_tail = [
        "Pre-shape and Rest",
        "Final Shape",
        "Final Proof",
        "Preheat the Oven",
        "Score and Load",
        "Covered Bake",
        "Uncovered Bake",
        "Cool Completely",
    ];

    for inputs in [
        RecipeInputs::default(),
        RecipeInputs {
            method: Method::Biga,
            target_hydration: 82.0,
            ..RecipeInputs::default()
        },
    ] {
        let steps = generate(&inputs);
        let tail: Vec<&str> = steps
            .iter()
            .rev()
            .take(expected_tail.len())
            .rev()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(tail, expected_tail);
    }
}

#[test]
fn test_critical_flags() {
    let steps = generate(&RecipeInputs::default());
    let critical: Vec<&str> = steps
        .iter()
        .filter(|s| s.critical)
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(
        critical,
        [
            "Final Shape",
            "Preheat the Oven",
            "Score and Load",
            "Cool Completely"
        ]
    );
}

#[test]
fn test_proof_step_carries_estimated_proof_time() {
    let inputs = RecipeInputs::default();
    let config = EngineConfig::default();
    let recipe = calculate_recipe(&inputs, &config);
    let steps = generate_steps(&inputs, &recipe, &config);

    let proof = steps
        .iter()
        .find(|s| s.title == "Final Proof")
        .expect("schedule must contain a proof step");
    assert_eq!(proof.duration, Some(recipe.estimated_proof_time));
}

#[test]
fn test_generation_is_deterministic() {
    let inputs = RecipeInputs {
        method: Method::Poolish,
        target_hydration: 78.0,
        ..RecipeInputs::default()
    };
    assert_eq!(generate(&inputs), generate(&inputs));
}
