use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_core::{MapConfig, MapSeed, generate_map, smooth_map};
use clap::{Parser, ValueEnum};

mod file_config;
mod render;
mod seed;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML map config; missing fields fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for generation: a bare number is used directly, any other text
    /// is hashed. When absent (and no config file supplies one), a fresh
    /// entropy-derived seed is drawn and printed for reproduction
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of smoothing passes to apply after generation
    #[arg(short, long, default_value_t = 1)]
    passes: u32,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    #[arg(long)]
    fill_percent: Option<i32>,

    #[arg(long)]
    wall_threshold: Option<i32>,

    #[arg(long)]
    empty_threshold: Option<i32>,

    /// Output format for the final grid
    #[arg(long, value_enum, default_value = "ascii")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => file_config::load_map_config(path)?,
        None => MapConfig::default(),
    };
    apply_overrides(&mut config, &args);

    // Entropy seeding happens only here, at the host boundary. The core
    // stays deterministic for whatever seed value it is handed.
    if args.seed.is_none() && args.config.is_none() {
        config.seed = MapSeed::Number(seed::generate_runtime_seed());
    }

    config.validate().context("Invalid map configuration")?;

    let mut grid = generate_map(&config).context("Map generation failed")?;
    for pass in 0..args.passes {
        grid = smooth_map(&grid, &config)
            .with_context(|| format!("Smoothing pass {} failed", pass + 1))?;
    }

    match args.format {
        Format::Ascii => {
            for line in render::ascii_lines(&grid) {
                println!("{line}");
            }
            println!(
                "Seed state: {} | Size: {}x{} | Walls: {}/{}",
                config.seed.state(),
                grid.width(),
                grid.height(),
                grid.wall_count(),
                grid.width() * grid.height()
            );
        }
        Format::Json => {
            let dump = render::GridDump::from_grid(&grid);
            println!(
                "{}",
                serde_json::to_string_pretty(&dump).context("Failed to serialize grid JSON")?
            );
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut MapConfig, args: &Args) {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fill_percent) = args.fill_percent {
        config.fill_percent = fill_percent;
    }
    if let Some(wall_threshold) = args.wall_threshold {
        config.wall_threshold = wall_threshold;
    }
    if let Some(empty_threshold) = args.empty_threshold {
        config.empty_threshold = empty_threshold;
    }
    if let Some(raw_seed) = &args.seed {
        config.seed = seed::parse_seed_arg(raw_seed);
    }
}
