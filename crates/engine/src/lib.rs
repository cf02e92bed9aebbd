//! Session engine for the word tile board
//!
//! Owns the tile collection of a level in play and routes UI intent (actions,
//! drags) into the board logic in [`word_tiles_core`]. Also loads level data
//! and keeps per-session sound settings.
//!
//! # Example
//!
//! ```
//! use word_tiles_engine::{levels, BoardAction, Session};
//! use word_tiles_engine::types::ShiftDirection;
//!
//! let mut session = Session::new(levels::by_index(0).unwrap()).unwrap();
//! let before = session.board().unwrap();
//!
//! session.apply_action(BoardAction::Shift(ShiftDirection::Down)).unwrap();
//! assert_ne!(session.board().unwrap(), before);
//! assert!(!session.is_solved().unwrap());
//! ```

pub mod drag;
pub mod error;
pub mod levels;
pub mod session;
pub mod settings;

pub use word_tiles_core as core;
pub use word_tiles_types as types;

pub use drag::DragPreview;
pub use error::{LevelError, SessionError};
pub use levels::load_level;
pub use session::{BoardAction, Session};
pub use settings::SoundSettings;
