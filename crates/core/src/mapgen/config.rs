//! Named generation tunables with documented defaults and validation.

use serde::{Deserialize, Serialize};

use super::MapGenError;
use super::seed::MapSeed;

/// Per-map tunables. Fields use `i32` so out-of-range values arriving from
/// config files or flags stay representable until [`MapConfig::validate`]
/// rejects them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Grid width in cells. Default 16.
    pub width: i32,
    /// Grid height in cells. Default 9.
    pub height: i32,
    /// Probability (0..=100) that an interior cell starts as a wall.
    /// Default 45.
    pub fill_percent: i32,
    /// Seed for the generation PRNG. Default `Number(0)`.
    pub seed: MapSeed,
    /// A cell with strictly more wall neighbors than this becomes a wall.
    /// Default 4.
    pub wall_threshold: i32,
    /// A cell with strictly fewer wall neighbors than this becomes empty.
    /// Default 3.
    pub empty_threshold: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 9,
            fill_percent: 45,
            seed: MapSeed::Number(0),
            wall_threshold: 4,
            empty_threshold: 3,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), MapGenError> {
        if self.width < 1 || self.height < 1 {
            return Err(MapGenError::InvalidDimension { width: self.width, height: self.height });
        }
        if !(0..=100).contains(&self.fill_percent) {
            return Err(MapGenError::InvalidFillPercent(self.fill_percent));
        }
        for threshold in [self.wall_threshold, self.empty_threshold] {
            if !(0..=8).contains(&threshold) {
                return Err(MapGenError::InvalidThreshold(threshold));
            }
        }
        Ok(())
    }
}
