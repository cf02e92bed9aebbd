//! Reposition module - rotate-in-place and whole-board shift
//!
//! Both operations mutate the tiles they are given, and only on success: a
//! rotation that finds no slot leaves the tile exactly as it was, and a tile
//! that cannot shift keeps its position.

use tracing::debug;

use crate::compose::compose_board;
use crate::error::ShapeError;
use crate::place::can_place;
use crate::rotate::{oriented_grid, rotate};
use crate::search::ring_around;
use crate::types::{Grid, Point, ShiftDirection, Tile, QUARTER_TURNS, SHIFT_PASS_LIMIT};

/// Rotate `tile` one more clockwise quarter turn, moving it if it must
///
/// `board` is the composed board without this tile. If the new orientation
/// fits at the current position the position is kept. Otherwise rings of
/// increasing Chebyshev distance around it are searched (up to the board size)
/// and the first fitting position wins.
///
/// Returns the committed position, or `None` when nothing fits, in which case
/// the tile is left untouched.
pub fn rotate_in_place(tile: &mut Tile, board: &Grid) -> Result<Option<Point>, ShapeError> {
    let rotated = rotate(&tile.grid, i32::from(tile.rotations) + 1)?;
    let next_rotations = (tile.rotations % QUARTER_TURNS + 1) % QUARTER_TURNS;
    let origin = tile.position;

    let found = if can_place(&rotated, origin, board).can_place() {
        Some(origin)
    } else {
        let max_distance = board.height() as i32;
        (1..=max_distance).find_map(|distance| {
            ring_around(origin, distance)
                .find(|&candidate| can_place(&rotated, candidate, board).can_place())
        })
    };

    match found {
        Some(position) => {
            if position != origin {
                debug!(tile = %tile.id, ?origin, ?position, "rotation moved tile to fit");
            }
            tile.position = position;
            tile.rotations = next_rotations;
            Ok(Some(position))
        }
        None => {
            debug!(tile = %tile.id, ?origin, "no position fits rotated tile");
            Ok(None)
        }
    }
}

/// Summary of one [`shift_tiles`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftOutcome {
    /// Tiles that moved one cell
    pub moved: usize,
    /// Passes made over the tile collection
    pub passes: u32,
}

/// Move every tile one cell in `direction` where possible
///
/// Each pass tries every tile that has not moved yet against the board of all
/// other tiles at their current positions. A tile blocked by another tile can
/// succeed in a later pass once the blocker has moved. Passes stop when every
/// tile has moved, a pass moves nothing, or [`SHIFT_PASS_LIMIT`] is reached.
/// A tile moves at most one cell per call.
pub fn shift_tiles(
    tiles: &mut [Tile],
    direction: ShiftDirection,
    board_size: usize,
) -> Result<ShiftOutcome, ShapeError> {
    let mut outcome = ShiftOutcome::default();
    if tiles.is_empty() {
        return Ok(outcome);
    }

    let delta = direction.delta();
    let grids = tiles
        .iter()
        .map(oriented_grid)
        .collect::<Result<Vec<_>, _>>()?;
    let mut settled = vec![false; tiles.len()];

    while outcome.moved < tiles.len() && outcome.passes < SHIFT_PASS_LIMIT {
        outcome.passes += 1;
        let mut moved_this_pass = 0;

        for index in 0..tiles.len() {
            if settled[index] {
                continue;
            }

            let target = tiles[index].position + delta;
            let others = tiles
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != index)
                .map(|(_, tile)| tile);
            let board = compose_board(others, board_size)?;

            if can_place(&grids[index], target, &board).can_place() {
                tiles[index].position = target;
                settled[index] = true;
                moved_this_pass += 1;
            }
        }

        outcome.moved += moved_this_pass;
        if moved_this_pass == 0 {
            break;
        }
    }

    debug!(
        direction = direction.as_str(),
        moved = outcome.moved,
        passes = outcome.passes,
        total = tiles.len(),
        "shift finished"
    );
    Ok(outcome)
}
