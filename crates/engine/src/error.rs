use crate::core::ShapeError;

/// Errors that can occur while loading level data.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level board size must be positive")]
    EmptyBoard,

    #[error("duplicate tile id {0}")]
    DuplicateTileId(String),

    #[error("tile {0} has no letters")]
    EmptyTile(String),

    #[error("tile {0} letters are not edge-connected")]
    DisconnectedTile(String),

    #[error("tile {0} letters enclose an empty cell")]
    TileWithHole(String),

    #[error("no bundled level at index {0}")]
    UnknownLevel(usize),
}

/// Errors that can occur while driving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown tile {0}")]
    UnknownTile(String),

    #[error("no drag in progress")]
    NoDrag,

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Level(#[from] LevelError),
}
