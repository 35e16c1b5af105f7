//! Procedural cave generation domain split into coherent submodules.
//!
//! The two operations exposed here are pure: they read their arguments,
//! return a fresh grid, and hold no state between calls. Seeding policy
//! (explicit versus entropy-derived seeds) belongs to the caller.

pub mod config;
pub mod grid;
pub mod seed;

mod generator;
mod smoother;

use std::fmt;

pub use config::MapConfig;

use grid::CaveGrid;
use seed::MapSeed;

/// Validation failures for generation and smoothing parameters.
/// All are detected before any grid is allocated or mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapGenError {
    /// Width or height below 1.
    InvalidDimension { width: i32, height: i32 },
    /// Fill percent outside `[0, 100]`.
    InvalidFillPercent(i32),
    /// A smoothing threshold outside `[0, 8]`, the possible neighbor counts.
    InvalidThreshold(i32),
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "map dimensions must be at least 1x1, got {width}x{height}")
            }
            Self::InvalidFillPercent(fill) => {
                write!(f, "fill percent must be within 0..=100, got {fill}")
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "smoothing threshold must be within 0..=8, got {threshold}")
            }
        }
    }
}

impl std::error::Error for MapGenError {}

/// Produces the initial cave grid: border cells are walls, interior cells
/// are walls with probability `fill_percent`, drawn from a PRNG seeded
/// deterministically from `seed`. Identical arguments always produce a
/// bit-identical grid.
pub fn generate(
    width: i32,
    height: i32,
    fill_percent: i32,
    seed: &MapSeed,
) -> Result<CaveGrid, MapGenError> {
    generator::generate(width, height, fill_percent, seed)
}

/// Applies one smoothing pass and returns the resulting grid.
///
/// The pass is double-buffered: every cell's new state is decided from the
/// input grid's neighbor counts, never from cells already rewritten within
/// the same pass. The wall rule is checked before the empty rule, so
/// overlapping threshold ranges resolve in that order.
pub fn smooth(
    grid: &CaveGrid,
    wall_threshold: i32,
    empty_threshold: i32,
) -> Result<CaveGrid, MapGenError> {
    smoother::smooth(grid, wall_threshold, empty_threshold)
}

pub fn generate_map(config: &MapConfig) -> Result<CaveGrid, MapGenError> {
    generate(config.width, config.height, config.fill_percent, &config.seed)
}

pub fn smooth_map(grid: &CaveGrid, config: &MapConfig) -> Result<CaveGrid, MapGenError> {
    smooth(grid, config.wall_threshold, config.empty_threshold)
}
