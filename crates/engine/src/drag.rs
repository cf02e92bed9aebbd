//! Drag state for a tile being moved with the pointer

use crate::core::BoardScale;
use crate::types::{PixelPoint, PlacementResult, Point};

/// In-progress drag, recorded when the pointer goes down on a tile
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DragState {
    pub tile_id: String,
    /// Pointer position when the drag started
    pub start_pointer: PixelPoint,
    /// Tile position (board units) when the drag started
    pub start_position: Point,
    pub scale: BoardScale,
    /// Shadow from the latest pointer move
    pub last_shadow: Option<(Point, PlacementResult)>,
}

/// Where a dragged tile is drawn and where it would land
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    pub tile_id: String,
    /// Fractional tile position in board units, following the pointer
    pub unit_position: PixelPoint,
    /// Tile top-left in board pixels
    pub pixel_position: PixelPoint,
    /// Snapped landing cell
    pub shadow: Point,
    /// Placement check at the shadow cell
    pub placement: PlacementResult,
}
