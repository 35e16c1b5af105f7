//! Textual consumption of a finished grid: ASCII rows and a JSON dump.

use cave_core::CaveGrid;
use serde::Serialize;

/// One string per row, `y` increasing downward, `#` for walls and `.` for
/// empty cells.
pub fn ascii_lines(grid: &CaveGrid) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            (0..grid.width()).map(|x| if grid.cell_at(x, y).is_wall() { '#' } else { '.' }).collect()
        })
        .collect()
}

/// Machine-readable grid shape: row-major cells, 1 for wall, 0 for empty.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct GridDump {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<u8>,
}

impl GridDump {
    pub fn from_grid(grid: &CaveGrid) -> Self {
        let mut cells = Vec::with_capacity(grid.width() * grid.height());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                cells.push(u8::from(grid.cell_at(x, y).is_wall()));
            }
        }
        Self { width: grid.width(), height: grid.height(), cells }
    }
}

#[cfg(test)]
mod tests {
    use cave_core::{MapSeed, generate};

    use super::*;

    #[test]
    fn ascii_rows_show_walls_as_hashes_and_empty_as_dots() {
        let grid = generate(4, 3, 0, &MapSeed::Number(1)).expect("valid arguments");

        let lines = ascii_lines(&grid);
        assert_eq!(lines, vec!["####", "#..#", "####"]);
    }

    #[test]
    fn grid_dump_is_row_major_with_binary_cells() {
        let grid = generate(3, 3, 0, &MapSeed::Number(1)).expect("valid arguments");

        let dump = GridDump::from_grid(&grid);
        assert_eq!(dump.width, 3);
        assert_eq!(dump.height, 3);
        assert_eq!(dump.cells, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn grid_dump_serializes_to_the_expected_json_shape() {
        let grid = generate(3, 2, 100, &MapSeed::Number(0)).expect("valid arguments");

        let json = serde_json::to_value(GridDump::from_grid(&grid)).expect("serializable");
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["cells"].as_array().map(Vec::len), Some(6));
    }
}
