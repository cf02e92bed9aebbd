//! Pad module - normalize rectangular tile grids to squares
//!
//! Rotation needs square input, so level data goes through [`pad_to_square`]
//! when it is loaded.

use crate::types::Grid;

/// Pad a grid with empty cells until it is square, keeping content centered
///
/// The side is the larger of the row count and the longest row. Padding rows
/// (and columns) alternate between the end and the start, the first one going
/// to the end, so an odd amount of padding leaves one more at the end.
///
/// # Examples
///
/// ```
/// use word_tiles_core::pad::pad_to_square;
/// use word_tiles_core::types::Grid;
///
/// let padded = pad_to_square(&Grid::parse(&["ab", "cd", "ef", "gh"]));
/// assert_eq!(padded, Grid::parse(&[".ab.", ".cd.", ".ef.", ".gh."]));
/// ```
pub fn pad_to_square(grid: &Grid) -> Grid {
    if grid.is_empty() {
        return Grid::default();
    }

    let height = grid.height();
    let width = grid.width();
    let size = height.max(width);
    let top = leading_padding(size - height);
    let left = leading_padding(size - width);

    let mut square = Grid::empty(size);
    for (point, letter) in grid.filled_cells() {
        square.set(
            point.x + left as i32,
            point.y + top as i32,
            Some(letter),
        );
    }
    square
}

/// Padding placed before the content when `extra` cells are added alternately
/// end, start, end, ...
#[inline]
fn leading_padding(extra: usize) -> usize {
    extra / 2
}
