//! Compose module - derive the board snapshot from the tile collection
//!
//! The board is never stored as authoritative state. It is rebuilt from the
//! tiles whenever a caller needs it, which costs board area times tile count.

use tracing::trace;

use crate::error::ShapeError;
use crate::rotate::oriented_grid;
use crate::types::{Grid, Point, Tile};

/// Overlay every tile, in its current orientation, on an empty board
///
/// Tiles are written in iteration order. Cells that land outside the board are
/// dropped, and a later tile overwrites an earlier one where they overlap.
///
/// # Examples
///
/// ```
/// use word_tiles_core::compose::compose_board;
/// use word_tiles_core::types::{Grid, Point, Tile};
///
/// let tiles = [Tile::new("t", Point::new(1, 2), Grid::parse(&["ab", "cd"]))];
/// let board = compose_board(&tiles, 5).unwrap();
/// assert_eq!(board.get(1, 2), Some(Some('a')));
/// assert_eq!(board.get(2, 3), Some(Some('d')));
/// assert_eq!(board.filled_count(), 4);
/// ```
pub fn compose_board<'a>(
    tiles: impl IntoIterator<Item = &'a Tile>,
    board_size: usize,
) -> Result<Grid, ShapeError> {
    let mut board = Grid::empty(board_size);

    for tile in tiles {
        let grid = oriented_grid(tile)?;
        for (offset, letter) in grid.filled_cells() {
            let Point { x, y } = tile.position + offset;
            if !board.set(x, y, Some(letter)) {
                trace!(tile = %tile.id, x, y, "tile cell clipped outside board");
            }
        }
    }

    Ok(board)
}

/// Compose the board from every tile except the one with `excluded_id`
///
/// This is the board a tile is validated against while it moves.
pub fn compose_board_without(
    tiles: &[Tile],
    board_size: usize,
    excluded_id: &str,
) -> Result<Grid, ShapeError> {
    compose_board(tiles.iter().filter(|tile| tile.id != excluded_id), board_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_applied_before_overlay() {
        let tile = Tile::new("t", Point::new(0, 0), Grid::parse(&["ab", ".."])).with_rotations(1);
        let board = compose_board([&tile], 3).unwrap();
        assert_eq!(board, Grid::parse(&[".a.", ".b.", "..."]));
    }

    #[test]
    fn test_clipped_cells_are_dropped() {
        let tile = Tile::new("t", Point::new(2, -1), Grid::parse(&["ab", "cd"]));
        let board = compose_board([&tile], 3).unwrap();
        assert_eq!(board, Grid::parse(&["..c", "...", "..."]));
    }

    #[test]
    fn test_later_tile_wins_on_overlap() {
        let first = Tile::new("first", Point::new(0, 0), Grid::parse(&["a"]));
        let second = Tile::new("second", Point::new(0, 0), Grid::parse(&["z"]));
        let board = compose_board([&first, &second], 2).unwrap();
        assert_eq!(board.get(0, 0), Some(Some('z')));
    }

    #[test]
    fn test_compose_without_excludes_by_id() {
        let tiles = vec![
            Tile::new("keep", Point::new(0, 0), Grid::parse(&["a"])),
            Tile::new("skip", Point::new(1, 1), Grid::parse(&["b"])),
        ];
        let board = compose_board_without(&tiles, 2, "skip").unwrap();
        assert_eq!(board, Grid::parse(&["a.", ".."]));
    }

    #[test]
    fn test_non_square_tile_is_an_error() {
        let tile = Tile::new("t", Point::new(0, 0), Grid::parse(&["abc"]));
        assert!(compose_board([&tile], 3).is_err());
    }
}
