//! Level loading - parse, normalize and validate level data
//!
//! Level files are JSON documents matching [`Level`]. Tile grids may be
//! rectangular in the file; loading pads them to squares so they can rotate,
//! and rejects data the board logic cannot handle.

use std::collections::HashSet;

use tracing::debug;

use crate::core::{has_holes, is_edge_connected, pad_to_square};
use crate::error::LevelError;
use crate::types::{Level, QUARTER_TURNS};

const HERBS: &str = include_str!("../levels/herbs.json");
const SEA_ANIMALS: &str = include_str!("../levels/sea-animals.json");
const FRUITS_AND_VEGGIES: &str = include_str!("../levels/fruits-and-veggies.json");

/// Level documents shipped with the engine, in play order
const BUNDLED: [&str; 3] = [HERBS, SEA_ANIMALS, FRUITS_AND_VEGGIES];

/// Parse and prepare a level from JSON
pub fn load_level(json: &str) -> Result<Level, LevelError> {
    let level: Level = serde_json::from_str(json)?;
    prepare_level(level)
}

/// Pad tile grids, normalize rotation counts and validate a level
///
/// Checks that the board has a size, tile ids are unique, and every tile has
/// at least one letter, with all letters edge-connected around no empty cell.
/// Already prepared levels pass through unchanged.
pub fn prepare_level(mut level: Level) -> Result<Level, LevelError> {
    if level.grid_size == 0 {
        return Err(LevelError::EmptyBoard);
    }

    let mut ids = HashSet::with_capacity(level.tiles.len());
    for tile in &mut level.tiles {
        if !ids.insert(tile.id.clone()) {
            return Err(LevelError::DuplicateTileId(tile.id.clone()));
        }
        if tile.grid.filled_count() == 0 {
            return Err(LevelError::EmptyTile(tile.id.clone()));
        }
        if !is_edge_connected(&tile.grid) {
            return Err(LevelError::DisconnectedTile(tile.id.clone()));
        }
        if has_holes(&tile.grid) {
            return Err(LevelError::TileWithHole(tile.id.clone()));
        }
        tile.grid = pad_to_square(&tile.grid);
        tile.rotations %= QUARTER_TURNS;
    }

    debug!(theme = %level.theme, tiles = level.tiles.len(), size = level.grid_size, "level loaded");
    Ok(level)
}

/// Number of bundled levels
pub fn bundled_count() -> usize {
    BUNDLED.len()
}

/// Load the bundled level at `index`
pub fn by_index(index: usize) -> Result<Level, LevelError> {
    let json = BUNDLED
        .get(index)
        .ok_or(LevelError::UnknownLevel(index))?;
    load_level(json)
}

/// Load every bundled level
pub fn bundled() -> Result<Vec<Level>, LevelError> {
    BUNDLED.iter().map(|json| load_level(json)).collect()
}
