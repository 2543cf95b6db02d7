// ABOUTME: Command-line front end for the Levain recipe engine
// ABOUTME: Prints a formula and bake schedule for the given inputs, as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use levain::calculator::calculate_recipe;
use levain::config::EngineConfig;
use levain::labels::{hydration_label, speed_label};
use levain::models::{Method, Mixer, PrefermentStorage, RecipeInputs, RecipeOutput, Step};
use levain::steps::generate_steps;
use levain::units::{celsius_to_fahrenheit, format_duration, grams_to_ounces};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Direct,
    Biga,
    Poolish,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Direct => Self::Direct,
            MethodArg::Biga => Self::Biga,
            MethodArg::Poolish => Self::Poolish,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MixerArg {
    Hand,
    Kitchenaid,
}

impl From<MixerArg> for Mixer {
    fn from(arg: MixerArg) -> Self {
        match arg {
            MixerArg::Hand => Self::Hand,
            MixerArg::Kitchenaid => Self::Kitchenaid,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StorageArg {
    Fridge,
    Room,
}

impl From<StorageArg> for PrefermentStorage {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Fridge => Self::Fridge,
            StorageArg::Room => Self::Room,
        }
    }
}

/// Deterministic bread formula and schedule calculator
#[derive(Debug, Parser)]
#[command(name = "levain-cli", version, about)]
struct Cli {
    /// Total flour mass in grams
    #[arg(long, default_value_t = 500.0)]
    flour: f64,

    /// Target hydration as a baker's percentage
    #[arg(long, default_value_t = 70.0)]
    hydration: f64,

    /// Leavening method
    #[arg(long, value_enum, default_value_t = MethodArg::Direct)]
    method: MethodArg,

    /// Mixer type
    #[arg(long, value_enum, default_value_t = MixerArg::Hand)]
    mixer: MixerArg,

    /// Room temperature in degrees Celsius
    #[arg(long, default_value_t = 22.0)]
    room_temp: f64,

    /// Fermentation speed multiplier (0.5 slow to 2.0 fast)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Where the preferment matures (ignored for the direct method)
    #[arg(long, value_enum, default_value_t = StorageArg::Room)]
    storage: StorageArg,

    /// Emit the recipe and schedule as pretty-printed JSON
    #[arg(long)]
    json: bool,

    /// Show masses in ounces alongside grams
    #[arg(long)]
    ounces: bool,

    /// Show temperatures in Fahrenheit alongside Celsius
    #[arg(long)]
    fahrenheit: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Plan<'a> {
    inputs: &'a RecipeInputs,
    recipe: &'a RecipeOutput,
    steps: &'a [Step],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EngineConfig::load().context("Failed to load engine configuration")?;

    let inputs = RecipeInputs {
        method: cli.method.into(),
        total_flour: cli.flour,
        target_hydration: cli.hydration,
        mixer: cli.mixer.into(),
        room_temp: cli.room_temp,
        fermentation_speed: cli.speed,
        preferment_storage: cli.storage.into(),
    };

    let recipe = calculate_recipe(&inputs, &config);
    let steps = generate_steps(&inputs, &recipe, &config);

    if cli.json {
        let plan = Plan {
            inputs: &inputs,
            recipe: &recipe,
            steps: &steps,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?
        );
        return Ok(());
    }

    print_plan(&cli, &inputs, &recipe, &steps);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_plan(cli: &Cli, inputs: &RecipeInputs, recipe: &RecipeOutput, steps: &[Step]) {
    let mass = |grams: f64| {
        if cli.ounces {
            format!("{grams:.1} g ({:.2} oz)", grams_to_ounces(grams))
        } else {
            format!("{grams:.1} g")
        }
    };
    let temp = |celsius: f64| {
        if cli.fahrenheit {
            format!("{celsius:.0} C ({:.0} F)", celsius_to_fahrenheit(celsius))
        } else {
            format!("{celsius:.0} C")
        }
    };

    println!("Formula");
    println!("  Flour        {}", mass(recipe.flour_total));
    println!(
        "  Water        {}  ({:.0}% hydration, {})",
        mass(recipe.water_total),
        inputs.target_hydration,
        hydration_label(inputs.target_hydration)
    );
    println!("  Salt         {}", mass(recipe.salt));
    println!(
        "  Yeast        {}  ({})",
        mass(recipe.yeast),
        speed_label(inputs.fermentation_speed)
    );

    if let Some(pf) = &recipe.preferment {
        println!();
        println!("{}", inputs.method.preferment_name());
        println!("  Flour        {}", mass(pf.flour));
        println!("  Water        {}", mass(pf.water));
        println!("  Yeast        {}", mass(pf.yeast));
        println!(
            "  Maturation   {}",
            format_duration(recipe.preferment_time)
        );
    }

    println!();
    println!("Timing");
    println!(
        "  Water temp   {}",
        temp(f64::from(recipe.calculated_water_temp))
    );
    println!(
        "  Bulk rise    {}",
        format_duration(recipe.estimated_bulk_time)
    );
    println!(
        "  Final proof  {}",
        format_duration(recipe.estimated_proof_time)
    );
    println!("  Total        {}", format_duration(recipe.total_time));

    println!();
    println!("Schedule");
    for step in steps {
        let marker = if step.critical { "!" } else { " " };
        let duration = step
            .duration
            .map_or_else(String::new, |d| format!(" [{}]", format_duration(d)));
        println!("{marker} {:>2}. {}{duration}", step.id, step.title);
        println!("       {}", step.description);
    }
}
