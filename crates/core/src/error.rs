//! Error types for the board algorithms

/// A grid had the wrong shape for the requested operation.
///
/// Rotation only works on square grids; rectangular level data must go
/// through [`pad_to_square`](crate::pad::pad_to_square) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid must be square: row {row} has {len} cells, expected {size}")]
    NotSquare { size: usize, row: usize, len: usize },
}
