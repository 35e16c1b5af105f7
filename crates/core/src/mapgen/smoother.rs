//! One cellular-automaton smoothing pass over a cave grid.
//!
//! Neighbor lookups clamp to the nearest valid coordinate instead of
//! wrapping or skipping, so edge and corner cells count their clamped
//! duplicates more than once. That biases the rim toward whatever state
//! already sits there, which keeps generated borders wall-heavy without the
//! pass enforcing the border invariant outright.

use super::MapGenError;
use super::grid::CaveGrid;
use crate::types::Cell;

pub(super) fn smooth(
    grid: &CaveGrid,
    wall_threshold: i32,
    empty_threshold: i32,
) -> Result<CaveGrid, MapGenError> {
    for threshold in [wall_threshold, empty_threshold] {
        if !(0..=8).contains(&threshold) {
            return Err(MapGenError::InvalidThreshold(threshold));
        }
    }

    // Writes go to a separate buffer: every decision below reads the
    // pre-pass grid, so scan order cannot leak into the result.
    let mut next = grid.clone();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let neighbors = wall_neighbor_count(grid, x, y);
            if neighbors > wall_threshold {
                next.set_cell(x, y, Cell::Wall);
            } else if neighbors < empty_threshold {
                next.set_cell(x, y, Cell::Empty);
            }
        }
    }

    Ok(next)
}

/// Walls among the 8 surrounding cells, with out-of-range coordinates
/// clamped back onto the grid.
fn wall_neighbor_count(grid: &CaveGrid, x: usize, y: usize) -> i32 {
    let max_x = grid.width() as isize - 1;
    let max_y = grid.height() as isize - 1;

    let mut count = 0;
    for dx in -1_isize..=1 {
        for dy in -1_isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = (x as isize + dx).clamp(0, max_x) as usize;
            let ny = (y as isize + dy).clamp(0, max_y) as usize;
            if grid.cell_at(nx, ny).is_wall() {
                count += 1;
            }
        }
    }
    count
}
