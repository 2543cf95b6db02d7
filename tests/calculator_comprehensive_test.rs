// ABOUTME: Comprehensive behavior tests for the recipe calculators
// ABOUTME: Covers masses, water temperature, fermentation timing, and invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

use levain::calculator::{
    calculate_bulk_time, calculate_friction, calculate_hydration_factor, calculate_preferment,
    calculate_preferment_time, calculate_proof_time, calculate_recipe, calculate_total_time,
    calculate_water_temp, calculate_yeast,
};
use levain::config::EngineConfig;
use levain::models::{Method, Mixer, PrefermentStorage, RecipeInputs};

fn config() -> EngineConfig {
    EngineConfig::default()
}

fn inputs() -> RecipeInputs {
    RecipeInputs::default()
}

// Friction factor

#[test]
fn test_friction_base_values_per_mixer() {
    let c = config();
    assert!((calculate_friction(Mixer::Hand, 70.0, &c.friction) - 2.0).abs() < f64::EPSILON);
    assert!((calculate_friction(Mixer::Kitchenaid, 70.0, &c.friction) - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_friction_unchanged_exactly_at_threshold() {
    let c = config();
    assert!((calculate_friction(Mixer::Hand, 75.0, &c.friction) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_friction_reduced_above_threshold_and_floored_at_zero() {
    let c = config();
    // Hand friction 2 minus the 2 degree reduction floors at exactly zero
    assert!(calculate_friction(Mixer::Hand, 75.1, &c.friction).abs() < f64::EPSILON);
    assert!(
        (calculate_friction(Mixer::Kitchenaid, 80.0, &c.friction) - 10.0).abs() < f64::EPSILON
    );
}

// Water temperature

#[test]
fn test_water_temp_rule_of_three_reference_scenario() {
    // 24*3 - 22 (room) - 22 (flour) - 2 (hand friction) = 26
    assert_eq!(calculate_water_temp(&inputs(), &config()), 26);
}

#[test]
fn test_water_temp_rule_of_four_counts_preferment_temperature() {
    let c = config();
    let room = RecipeInputs {
        method: Method::Biga,
        ..inputs()
    };
    // 24*4 - 22 - 22 - 2 - 22 = 28
    assert_eq!(calculate_water_temp(&room, &c), 28);

    let fridge = RecipeInputs {
        preferment_storage: PrefermentStorage::Fridge,
        ..room
    };
    // 96 - 22 - 22 - 2 - 4 = 46, clamped to 40
    assert_eq!(calculate_water_temp(&fridge, &c), 40);
}

#[test]
fn test_water_temp_clamped_to_configured_band() {
    let c = config();
    let hot_room = RecipeInputs {
        room_temp: 45.0,
        ..inputs()
    };
    assert_eq!(calculate_water_temp(&hot_room, &c), 0);

    let cold_room = RecipeInputs {
        room_temp: -10.0,
        ..inputs()
    };
    assert_eq!(calculate_water_temp(&cold_room, &c), 40);
}

#[test]
fn test_water_temp_decreases_as_room_warms() {
    let c = config();
    let mut last = i32::MAX;
    for room in [10, 16, 22, 28, 34] {
        let i = RecipeInputs {
            room_temp: f64::from(room),
            ..inputs()
        };
        let temp = calculate_water_temp(&i, &c);
        assert!(temp <= last, "water temp rose between {room} C steps");
        last = temp;
    }
}

// Yeast dosing

#[test]
fn test_yeast_scales_linearly_with_speed() {
    let c = config();
    assert!((calculate_yeast(500.0, 1.0, 70.0, &c.yeast) - 7.5).abs() < f64::EPSILON);
    assert!((calculate_yeast(500.0, 2.0, 70.0, &c.yeast) - 15.0).abs() < f64::EPSILON);
    assert!((calculate_yeast(500.0, 0.5, 70.0, &c.yeast) - 3.8).abs() < f64::EPSILON);
}

#[test]
fn test_yeast_reduced_above_hydration_threshold() {
    let c = config();
    let at = calculate_yeast(500.0, 1.0, 75.0, &c.yeast);
    let above = calculate_yeast(500.0, 1.0, 75.1, &c.yeast);
    assert!((at - 7.5).abs() < f64::EPSILON);
    // 1.5% * 0.90 = 1.35%, so 6.75 g rounded to one decimal
    assert!((above - 6.8).abs() < f64::EPSILON);
    assert!(above < at);
}

// Preferment composition

#[test]
fn test_biga_composition_for_500_g_flour() {
    let pf = calculate_preferment(Method::Biga, 500.0, &config().preferment)
        .expect("biga must produce a preferment");
    assert!((pf.flour - 150.0).abs() < f64::EPSILON);
    assert!((pf.water - 75.0).abs() < f64::EPSILON);
    assert!((pf.yeast - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_poolish_composition_for_500_g_flour() {
    let pf = calculate_preferment(Method::Poolish, 500.0, &config().preferment)
        .expect("poolish must produce a preferment");
    assert!((pf.flour - 150.0).abs() < f64::EPSILON);
    assert!((pf.water - 150.0).abs() < f64::EPSILON);
    // 0.1% of 150 g is 0.15 g, rounded half away from zero to 0.2
    assert!((pf.yeast - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_direct_method_has_no_preferment() {
    assert!(calculate_preferment(Method::Direct, 500.0, &config().preferment).is_none());
}

#[test]
fn test_preferment_flour_scales_linearly_with_batch_size() {
    let c = config();
    let small = calculate_preferment(Method::Biga, 400.0, &c.preferment).expect("preferment");
    let large = calculate_preferment(Method::Biga, 800.0, &c.preferment).expect("preferment");
    assert!((large.flour - 2.0 * small.flour).abs() < f64::EPSILON);
}

// Hydration factor

#[test]
fn test_hydration_factor_is_one_at_baseline() {
    let c = config();
    assert!((calculate_hydration_factor(65.0, &c.fermentation) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_hydration_factor_caps() {
    let c = config();
    // Dry slowdown caps at +15%, wet speedup at -30%
    assert!((calculate_hydration_factor(40.0, &c.fermentation) - 1.15).abs() < f64::EPSILON);
    assert!((calculate_hydration_factor(95.0, &c.fermentation) - 0.70).abs() < f64::EPSILON);
}

#[test]
fn test_hydration_factor_monotonically_decreasing() {
    let c = config();
    let mut last = f64::INFINITY;
    for hydration in [55, 60, 65, 70, 75, 80, 85] {
        let factor = calculate_hydration_factor(f64::from(hydration), &c.fermentation);
        assert!(factor <= last, "factor rose at {hydration}% hydration");
        last = factor;
    }
}

// Bulk and proof timing

#[test]
fn test_bulk_time_reference_conditions() {
    let c = config();
    assert_eq!(calculate_bulk_time(24.0, 1.0, 65.0, &c.fermentation), 120);
}

#[test]
fn test_bulk_time_halves_and_doubles_per_q10_step() {
    let c = config();
    assert_eq!(calculate_bulk_time(32.0, 1.0, 65.0, &c.fermentation), 60);
    assert_eq!(calculate_bulk_time(16.0, 1.0, 65.0, &c.fermentation), 240);
}

#[test]
fn test_bulk_time_has_no_upper_clamp() {
    let c = config();
    // A cold cellar legitimately produces a very long window
    let long = calculate_bulk_time(4.0, 0.5, 65.0, &c.fermentation);
    assert!(long > 1000, "expected an unclamped long bulk, got {long}");
}

#[test]
fn test_bulk_time_inverse_in_speed_multiplier() {
    let c = config();
    let standard = calculate_bulk_time(24.0, 1.0, 65.0, &c.fermentation);
    let fast = calculate_bulk_time(24.0, 2.0, 65.0, &c.fermentation);
    assert_eq!(standard, fast * 2);
}

#[test]
fn test_proof_time_is_half_of_bulk_within_band() {
    let c = config();
    assert_eq!(calculate_proof_time(120, &c.fermentation), 60);
}

#[test]
fn test_proof_time_clamped_to_band() {
    let c = config();
    assert_eq!(calculate_proof_time(40, &c.fermentation), 30);
    assert_eq!(calculate_proof_time(400, &c.fermentation), 120);
}

// Preferment maturation

#[test]
fn test_poolish_matures_longer_than_biga_at_room() {
    let c = config();
    let biga = calculate_preferment_time(Method::Biga, 22.0, PrefermentStorage::Room, &c);
    let poolish = calculate_preferment_time(Method::Poolish, 22.0, PrefermentStorage::Room, &c);
    // Poolish carries 10x less yeast, so its log-ratio factor is 1.5
    assert_eq!(biga, 571);
    assert_eq!(poolish, 856);
}

#[test]
fn test_fridge_maturation_hits_method_caps() {
    let c = config();
    let biga = calculate_preferment_time(Method::Biga, 22.0, PrefermentStorage::Fridge, &c);
    let poolish = calculate_preferment_time(Method::Poolish, 22.0, PrefermentStorage::Fridge, &c);
    assert_eq!(biga, 960);
    assert_eq!(poolish, 1440);
}

#[test]
fn test_direct_method_has_zero_preferment_time() {
    let c = config();
    assert_eq!(
        calculate_preferment_time(Method::Direct, 22.0, PrefermentStorage::Room, &c),
        0
    );
}

// Total time

#[test]
fn test_total_time_sums_the_expected_phases() {
    let c = config();
    // hand mix 15 + bulk 132 + rest 20 + shape 5 + proof 66 + bakes 44 + cooling 60
    assert_eq!(
        calculate_total_time(132, 66, 0, Mixer::Hand, false, false, &c.schedule),
        342
    );
}

#[test]
fn test_total_time_adds_autolyse_and_preferment_when_applicable() {
    let c = config();
    let base = calculate_total_time(132, 66, 0, Mixer::Hand, false, false, &c.schedule);
    let high = calculate_total_time(132, 66, 0, Mixer::Hand, true, false, &c.schedule);
    let indirect = calculate_total_time(132, 66, 571, Mixer::Hand, false, true, &c.schedule);
    assert_eq!(high, base + 45);
    assert_eq!(indirect, base + 571);
}

#[test]
fn test_total_time_machine_mix_is_shorter() {
    let c = config();
    let hand = calculate_total_time(120, 60, 0, Mixer::Hand, false, false, &c.schedule);
    let machine = calculate_total_time(120, 60, 0, Mixer::Kitchenaid, false, false, &c.schedule);
    assert_eq!(hand - machine, 3);
}

// Full recipe

#[test]
fn test_default_recipe_reference_values() {
    let recipe = calculate_recipe(&inputs(), &config());
    assert!((recipe.water_total - 350.0).abs() < f64::EPSILON);
    assert!((recipe.salt - 10.0).abs() < f64::EPSILON);
    assert!((recipe.yeast - 7.5).abs() < f64::EPSILON);
    assert_eq!(recipe.calculated_water_temp, 26);
    assert!(recipe.preferment.is_none());
    assert_eq!(recipe.preferment_time, 0);
}

#[test]
fn test_recipe_conserves_mass_across_methods() {
    let c = config();
    for method in [Method::Direct, Method::Biga, Method::Poolish] {
        let i = RecipeInputs { method, ..inputs() };
        let recipe = calculate_recipe(&i, &c);

        let (pf_flour, pf_water, pf_yeast) = recipe
            .preferment
            .map_or((0.0, 0.0, 0.0), |pf| (pf.flour, pf.water, pf.yeast));

        assert!(
            (recipe.final_dough.flour + pf_flour - recipe.flour_total).abs() < f64::EPSILON,
            "flour not conserved for {method:?}"
        );
        assert!(
            (recipe.final_dough.water + pf_water - recipe.water_total).abs() < f64::EPSILON,
            "water not conserved for {method:?}"
        );
        assert!(
            (recipe.final_dough.yeast + pf_yeast - recipe.yeast).abs() < 0.05 + f64::EPSILON,
            "yeast drifted past rounding tolerance for {method:?}"
        );
    }
}

#[test]
fn test_final_dough_yeast_never_negative() {
    let c = config();
    for method in [Method::Biga, Method::Poolish] {
        for flour in [100.0, 250.0, 500.0] {
            let i = RecipeInputs {
                method,
                total_flour: flour,
                fermentation_speed: 0.5,
                ..inputs()
            };
            let recipe = calculate_recipe(&i, &c);
            assert!(recipe.final_dough.yeast >= 0.0);
        }
    }
}

#[test]
fn test_recipe_is_deterministic() {
    let c = config();
    let i = RecipeInputs {
        method: Method::Poolish,
        target_hydration: 82.0,
        mixer: Mixer::Kitchenaid,
        room_temp: 19.5,
        fermentation_speed: 0.8,
        preferment_storage: PrefermentStorage::Fridge,
        ..inputs()
    };
    assert_eq!(calculate_recipe(&i, &c), calculate_recipe(&i, &c));
}

#[test]
fn test_recipe_total_time_excludes_preheat() {
    let c = config();
    let recipe = calculate_recipe(&inputs(), &c);
    let expected = calculate_total_time(
        recipe.estimated_bulk_time,
        recipe.estimated_proof_time,
        0,
        Mixer::Hand,
        false,
        false,
        &c.schedule,
    );
    assert_eq!(recipe.total_time, expected);
    assert_eq!(recipe.total_time, 342);
}
