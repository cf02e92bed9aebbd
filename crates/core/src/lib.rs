//! Board logic - pure, deterministic, and testable
//!
//! This crate holds the geometric rules of the word tile board. It has no
//! dependencies on UI, storage or I/O: every function takes tiles and grids by
//! reference and either returns a value or mutates the tile it was handed.
//!
//! # Module Structure
//!
//! - [`rotate`]: clockwise quarter-turn rotation of square grids
//! - [`place`]: placement validation with a structured failure reason
//! - [`compose`]: build the board snapshot from the tile collection
//! - [`words`]: extract horizontal and vertical words, win check
//! - [`outline`]: boundary polygon of a tile for selection/shadow rendering
//! - [`pad`]: pad rectangular level grids to squares
//! - [`geometry`]: pointer/pixel to board conversions, snapping, shadow position
//! - [`search`]: ring-ordered candidate offsets for nearest-position searches
//! - [`reposition`]: rotate-in-place and whole-board shift
//!
//! # Data Flow
//!
//! Level grids are padded once when loaded. Each tile is rotated by its
//! rotation count and overlaid to compose the board, which then feeds
//! placement checks while dragging, word finding for the win check, and
//! outlines for rendering.
//!
//! # Example
//!
//! ```
//! use word_tiles_core::{can_place, compose_board, find_words, rotate_in_place};
//! use word_tiles_core::types::{Grid, Point, Tile};
//!
//! let mut tiles = vec![
//!     Tile::new("tile-1", Point::new(0, 0), Grid::parse(&["no", ".."])),
//!     Tile::new("tile-2", Point::new(2, 0), Grid::parse(&["w.", ".."])),
//! ];
//!
//! let board = compose_board(&tiles, 4).unwrap();
//! let words = find_words(&board);
//! assert_eq!(words[0].text, "now");
//!
//! // Validate a move of tile-2 against the board without it.
//! let others = compose_board(&tiles[..1], 4).unwrap();
//! assert!(can_place(&tiles[1].grid, Point::new(2, 1), &others).can_place());
//!
//! // Rotate tile-1 a quarter turn; it still fits where it is.
//! let without_first = compose_board(&tiles[1..], 4).unwrap();
//! let position = rotate_in_place(&mut tiles[0], &without_first).unwrap();
//! assert_eq!(position, Some(Point::new(0, 0)));
//! ```

pub mod compose;
pub mod error;
pub mod geometry;
pub mod outline;
pub mod pad;
pub mod place;
pub mod reposition;
pub mod rotate;
pub mod search;
pub mod words;

pub use word_tiles_types as types;

// Re-export commonly used items for convenience
pub use compose::{compose_board, compose_board_without};
pub use error::ShapeError;
pub use geometry::{
    drag_delta, nearest_tile_cell, pointer_to_board_coords, shadow_position, snap_to_cell,
    BoardScale, NearestCell,
};
pub use outline::{has_holes, is_edge_connected, outline, to_svg_path};
pub use pad::pad_to_square;
pub use place::can_place;
pub use reposition::{rotate_in_place, shift_tiles, ShiftOutcome};
pub use rotate::{oriented_grid, rotate};
pub use words::{find_words, is_solved};
