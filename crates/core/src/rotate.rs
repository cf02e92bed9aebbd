//! Rotate module - quarter-turn rotation of square letter grids
//!
//! A single clockwise quarter turn maps `new[row][col] = old[size - 1 - col][row]`:
//! new row `c` is old column `c` read bottom to top. Multiple turns are
//! resolved directly per cell instead of turning repeatedly.

use crate::error::ShapeError;
use crate::types::{Grid, Tile, QUARTER_TURNS};

/// Verify that every row is as long as the grid is tall
pub fn ensure_square(grid: &Grid) -> Result<(), ShapeError> {
    let size = grid.height();
    match grid
        .rows()
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != size)
    {
        Some((row, cells)) => Err(ShapeError::NotSquare {
            size,
            row,
            len: cells.len(),
        }),
        None => Ok(()),
    }
}

/// Rotate a square grid clockwise by `quarter_turns` (taken modulo 4)
///
/// Negative counts turn counter-clockwise. Zero turns return an equal grid and
/// an empty grid rotates to itself.
///
/// # Examples
///
/// ```
/// use word_tiles_core::rotate::rotate;
/// use word_tiles_core::types::Grid;
///
/// let grid = Grid::parse(&["ab", "cd"]);
/// assert_eq!(rotate(&grid, 1).unwrap(), Grid::parse(&["ca", "db"]));
/// assert_eq!(rotate(&grid, -1).unwrap(), Grid::parse(&["bd", "ac"]));
/// assert!(rotate(&Grid::parse(&["abc"]), 1).is_err());
/// ```
pub fn rotate(grid: &Grid, quarter_turns: i32) -> Result<Grid, ShapeError> {
    ensure_square(grid)?;

    let size = grid.height();
    let turns = quarter_turns.rem_euclid(QUARTER_TURNS as i32);
    if turns == 0 || size == 0 {
        return Ok(grid.clone());
    }

    let rows = grid.rows();
    let last = size - 1;
    let rotated = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let (src_row, src_col) = match turns {
                        1 => (last - col, row),
                        2 => (last - row, last - col),
                        _ => (col, last - row),
                    };
                    rows[src_row][src_col]
                })
                .collect()
        })
        .collect();

    Ok(Grid::new(rotated))
}

/// The tile's grid in its current orientation
pub fn oriented_grid(tile: &Tile) -> Result<Grid, ShapeError> {
    rotate(&tile.grid, i32::from(tile.rotations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_turn_matches_definition() {
        let grid = Grid::parse(&["abc", "def", "ghi"]);
        let rotated = rotate(&grid, 1).unwrap();
        assert_eq!(rotated, Grid::parse(&["gda", "heb", "ifc"]));

        let size = 3i32;
        for row in 0..size {
            for col in 0..size {
                assert_eq!(rotated.get(col, row), grid.get(row, size - 1 - col));
            }
        }
    }

    #[test]
    fn test_multi_turn_equals_repeated_single_turns() {
        let grid = Grid::parse(&["ab.", ".c.", "d.e"]);
        let mut stepped = grid.clone();
        for turns in 1..=7 {
            stepped = rotate(&stepped, 1).unwrap();
            assert_eq!(rotate(&grid, turns).unwrap(), stepped, "turns = {}", turns);
        }
    }

    #[test]
    fn test_ensure_square_reports_first_bad_row() {
        let grid = Grid::parse(&["ab", "c", "de"]);
        assert_eq!(
            ensure_square(&grid),
            Err(ShapeError::NotSquare {
                size: 3,
                row: 0,
                len: 2
            })
        );
    }

    #[test]
    fn test_empty_grid_rotates_to_itself() {
        assert_eq!(rotate(&Grid::default(), 3).unwrap(), Grid::default());
    }
}
