pub mod mapgen;
pub mod types;

pub use mapgen::config::MapConfig;
pub use mapgen::grid::CaveGrid;
pub use mapgen::seed::MapSeed;
pub use mapgen::{MapGenError, generate, generate_map, smooth, smooth_map};
pub use types::Cell;
