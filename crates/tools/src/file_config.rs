//! Loading a [`MapConfig`] from a TOML file. Missing fields take their
//! documented defaults, so partial files are valid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cave_core::MapConfig;

pub fn load_map_config(path: &Path) -> Result<MapConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map config file: {}", path.display()))?;
    let config: MapConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse map config file: {}", path.display()))?;
    Ok(config)
}
