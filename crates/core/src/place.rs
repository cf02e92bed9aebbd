//! Place module - placement validation for a tile grid on the board
//!
//! Only occupied tile cells are checked. Cells are scanned row-major and the
//! first violation found decides the reported reason, so a tile that is both
//! off the board and overlapping reports whichever cell comes first.

use crate::types::{Axis, EdgeDirection, Grid, OffGridDetails, PlacementResult, Point};

/// Check whether `tile_grid` can sit with its top-left cell at `position`
///
/// `board` is the composed board without the tile being placed. Per cell the
/// checks run in order: x below zero, x past the board, y below zero, y past
/// the board, then overlap with an occupied board cell.
///
/// # Examples
///
/// ```
/// use word_tiles_core::place::can_place;
/// use word_tiles_core::types::{Axis, EdgeDirection, Grid, PlacementResult, Point};
///
/// let tile = Grid::parse(&["abc", "def"]);
/// let board = Grid::empty(4);
///
/// let result = can_place(&tile, Point::new(2, 1), &board);
/// let details = result.off_grid().unwrap();
/// assert_eq!(details.axis, Axis::X);
/// assert_eq!(details.direction, EdgeDirection::Positive);
/// assert_eq!(details.value, 4);
///
/// assert_eq!(can_place(&tile, Point::new(1, 1), &board), PlacementResult::Valid);
/// ```
pub fn can_place(tile_grid: &Grid, position: Point, board: &Grid) -> PlacementResult {
    let size = board.height() as i32;

    for (offset, _) in tile_grid.filled_cells() {
        let Point { x, y } = position + offset;

        if x < 0 {
            return off_grid(Axis::X, EdgeDirection::Negative, x);
        }
        if x >= size {
            return off_grid(Axis::X, EdgeDirection::Positive, x);
        }
        if y < 0 {
            return off_grid(Axis::Y, EdgeDirection::Negative, y);
        }
        if y >= size {
            return off_grid(Axis::Y, EdgeDirection::Positive, y);
        }
        if board.is_occupied(x, y) {
            return PlacementResult::Overlapping;
        }
    }

    PlacementResult::Valid
}

#[inline]
fn off_grid(axis: Axis, direction: EdgeDirection, value: i32) -> PlacementResult {
    PlacementResult::OffGrid(OffGridDetails {
        axis,
        direction,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tile_cells_may_hang_off_board() {
        let tile = Grid::parse(&["..", ".a"]);
        let board = Grid::empty(3);
        assert_eq!(can_place(&tile, Point::new(-1, -1), &board), PlacementResult::Valid);
    }

    #[test]
    fn test_negative_y_reports_top_edge() {
        let tile = Grid::parse(&["a"]);
        let board = Grid::empty(3);
        let result = can_place(&tile, Point::new(1, -2), &board);
        assert_eq!(
            result.off_grid(),
            Some(OffGridDetails {
                axis: Axis::Y,
                direction: EdgeDirection::Negative,
                value: -2,
            })
        );
    }

    #[test]
    fn test_x_checked_before_y_for_same_cell() {
        let tile = Grid::parse(&["a"]);
        let board = Grid::empty(3);
        let details = can_place(&tile, Point::new(-1, 5), &board).off_grid().unwrap();
        assert_eq!(details.axis, Axis::X);
        assert_eq!(details.direction, EdgeDirection::Negative);
    }

    #[test]
    fn test_overlap_detected() {
        let tile = Grid::parse(&["ab"]);
        let mut board = Grid::empty(3);
        board.set(1, 0, Some('z'));
        assert_eq!(
            can_place(&tile, Point::new(0, 0), &board),
            PlacementResult::Overlapping
        );
    }
}
