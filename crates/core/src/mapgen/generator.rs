//! Seeded initial fill: random interior walls with a forced solid border.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use super::MapGenError;
use super::grid::CaveGrid;
use super::seed::MapSeed;
use crate::types::Cell;

pub(super) fn generate(
    width: i32,
    height: i32,
    fill_percent: i32,
    seed: &MapSeed,
) -> Result<CaveGrid, MapGenError> {
    if width < 1 || height < 1 {
        return Err(MapGenError::InvalidDimension { width, height });
    }
    if !(0..=100).contains(&fill_percent) {
        return Err(MapGenError::InvalidFillPercent(fill_percent));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed.state());
    let mut grid = CaveGrid::filled(width as usize, height as usize, Cell::Empty);

    // Draw order is part of the output contract: all of column x before
    // column x + 1. The PRNG stream is sequential, so swapping the loops
    // would change the map produced by a given seed. Border cells consume
    // a draw even though their state is forced.
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let draw = (rng.next_u64() % 100) as i32;
            let cell = if draw < fill_percent || grid.is_border(x, y) {
                Cell::Wall
            } else {
                Cell::Empty
            };
            grid.set_cell(x, y, cell);
        }
    }

    Ok(grid)
}
