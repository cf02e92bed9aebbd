//! Geometry module - pixel/board conversions used at the UI boundary
//!
//! The UI layer reports pointer positions in pixels. These helpers turn them
//! into board-unit displacements, board-relative positions, grid cells and
//! snapped "shadow" positions for a tile being dragged.
//!
//! A [`BoardScale`] describes how many pixels one board unit covers: the board
//! element's rendered width divided by the number of units across it.

use crate::error::ShapeError;
use crate::place::can_place;
use crate::rotate::oriented_grid;
use crate::search::ring_around;
use crate::types::{Axis, EdgeDirection, Grid, OffGridDetails, PixelPoint, PlacementResult, Point, Tile};

/// Pixel-to-unit scale of the rendered board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardScale {
    /// Rendered board width in pixels
    pub pixel_width: f64,
    /// Number of board units across the board (must be positive)
    pub unit_count: f64,
}

impl BoardScale {
    pub fn new(pixel_width: f64, unit_count: f64) -> Self {
        Self {
            pixel_width,
            unit_count,
        }
    }

    /// Pixels covered by one board unit
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixel_width / self.unit_count
    }

    /// Top-left pixel of a board cell, when one unit is one cell
    pub fn cell_origin(&self, cell: Point) -> PixelPoint {
        let size = self.pixels_per_unit();
        PixelPoint::new(f64::from(cell.x) * size, f64::from(cell.y) * size)
    }
}

/// Convert a pointer displacement in pixels into board units
///
/// # Examples
///
/// ```
/// use word_tiles_core::geometry::{drag_delta, BoardScale};
/// use word_tiles_core::types::PixelPoint;
///
/// let scale = BoardScale::new(600.0, 12.0);
/// let delta = drag_delta(PixelPoint::new(160.0, 75.0), PixelPoint::new(10.0, 100.0), scale);
/// assert_eq!(delta, PixelPoint::new(3.0, -0.5));
/// ```
pub fn drag_delta(pointer: PixelPoint, drag_start: PixelPoint, scale: BoardScale) -> PixelPoint {
    let ppu = scale.pixels_per_unit();
    let delta = pointer - drag_start;
    PixelPoint::new(delta.x / ppu, delta.y / ppu)
}

/// Translate a pointer position into coordinates relative to the board origin
pub fn pointer_to_board_coords(pointer: PixelPoint, board_origin: PixelPoint) -> PixelPoint {
    pointer - board_origin
}

/// Tile cell closest to a board-relative pixel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCell<'a> {
    pub tile: &'a Tile,
    /// Board cell under the tile's letter
    pub cell_position: Point,
    /// Pixel distance from the point to the cell's box (zero inside it)
    pub distance: f64,
}

/// Find the occupied tile cell nearest to `point`
///
/// `point` is relative to the board origin (see [`pointer_to_board_coords`]).
/// Distance is measured to each cell's box, so a point inside a cell is at
/// distance zero. Only a cell within `threshold` pixels is returned; ties go to
/// the first cell found scanning tiles in order, then rows, then columns.
pub fn nearest_tile_cell<'a>(
    point: PixelPoint,
    tiles: &'a [Tile],
    threshold: f64,
    scale: BoardScale,
) -> Result<Option<NearestCell<'a>>, ShapeError> {
    let cell_size = scale.pixels_per_unit();
    let mut nearest: Option<NearestCell<'a>> = None;

    for tile in tiles {
        let grid = oriented_grid(tile)?;
        for (offset, _) in grid.filled_cells() {
            let cell_position = tile.position + offset;
            let left = f64::from(cell_position.x) * cell_size;
            let top = f64::from(cell_position.y) * cell_size;

            let nearest_x = point.x.clamp(left, left + cell_size);
            let nearest_y = point.y.clamp(top, top + cell_size);
            let distance = (point.x - nearest_x).hypot(point.y - nearest_y);

            if nearest.map_or(true, |best| distance < best.distance) {
                nearest = Some(NearestCell {
                    tile,
                    cell_position,
                    distance,
                });
            }
        }
    }

    Ok(nearest.filter(|cell| cell.distance <= threshold))
}

/// Snap a board-relative pixel position to the nearest cell
///
/// Each axis rounds up when the position is at least halfway into a cell.
pub fn snap_to_cell(position: PixelPoint, scale: BoardScale) -> Point {
    let ppu = scale.pixels_per_unit();
    Point::new(snap_axis(position.x / ppu), snap_axis(position.y / ppu))
}

#[inline]
fn snap_axis(units: f64) -> i32 {
    let whole = units.floor();
    if units - whole >= 0.5 {
        whole as i32 + 1
    } else {
        whole as i32
    }
}

/// One cell back toward the board from an off-grid violation
#[inline]
fn step_inward(position: Point, details: OffGridDetails) -> Point {
    match (details.axis, details.direction) {
        (Axis::X, EdgeDirection::Negative) => position.offset(1, 0),
        (Axis::X, EdgeDirection::Positive) => position.offset(-1, 0),
        (Axis::Y, EdgeDirection::Negative) => position.offset(0, 1),
        (Axis::Y, EdgeDirection::Positive) => position.offset(0, -1),
    }
}

/// Where a dragged tile would land, for drawing its shadow
///
/// `position` is the tile's top-left pixel position relative to the board,
/// `tile_grid` its current orientation and `board` the composed board without
/// it. The position is snapped to a cell; while that is off the board it is
/// walked one cell at a time away from the crossed edge (at most board-size
/// steps). If it is still invalid, rings of increasing distance around it are
/// searched and the valid cell nearest by Euclidean distance in the first ring
/// that has one is returned. With no valid cell anywhere, the snapped position
/// is returned as is.
pub fn shadow_position(
    position: PixelPoint,
    tile_grid: &Grid,
    board: &Grid,
    scale: BoardScale,
) -> Point {
    let snapped = snap_to_cell(position, scale);
    let size = board.height() as i32;

    let mut candidate = snapped;
    let mut result = can_place(tile_grid, candidate, board);
    let mut steps = 0;
    while let PlacementResult::OffGrid(details) = result {
        if steps >= size {
            break;
        }
        candidate = step_inward(candidate, details);
        result = can_place(tile_grid, candidate, board);
        steps += 1;
    }

    if result.can_place() {
        return candidate;
    }

    (1..=size)
        .find_map(|distance| {
            ring_around(candidate, distance)
                .filter(|&cell| can_place(tile_grid, cell, board).can_place())
                .min_by_key(|cell| {
                    let d = *cell - candidate;
                    d.x * d.x + d.y * d.y
                })
        })
        .unwrap_or(snapped)
}
