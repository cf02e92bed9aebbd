//! Session module - one play-through of a level
//!
//! The session owns the tile collection for a level and is the only place that
//! mutates it. UI events come in as [`BoardAction`]s or drag calls; the board,
//! words and outlines are derived from the tiles on demand.

use tracing::debug;

use crate::core::{
    can_place, compose_board, compose_board_without, drag_delta, find_words, is_solved,
    nearest_tile_cell, oriented_grid, outline, rotate_in_place, shadow_position, shift_tiles,
    BoardScale,
};
use crate::drag::{DragPreview, DragState};
use crate::error::{LevelError, SessionError};
use crate::levels::prepare_level;
use crate::settings::SoundSettings;
use crate::types::{
    Grid, Level, PixelPoint, PlacementResult, Point, ShiftDirection, Tile, WordResult,
};

/// Actions that change the tile layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Rotate a tile a quarter turn clockwise, moving it if needed
    Rotate { tile_id: String },
    /// Move every tile one cell in a direction where possible
    Shift(ShiftDirection),
    /// Move a tile to a position, if it fits there
    Place { tile_id: String, position: Point },
    /// Restore the level's initial layout
    Reset,
}

impl BoardAction {
    /// Parse an action from its command form
    ///
    /// # Examples
    ///
    /// ```
    /// use word_tiles_engine::BoardAction;
    /// use word_tiles_engine::types::{Point, ShiftDirection};
    ///
    /// assert_eq!(BoardAction::parse("shift:left"), Some(BoardAction::Shift(ShiftDirection::Left)));
    /// assert_eq!(
    ///     BoardAction::parse("place:tile-1:3:4"),
    ///     Some(BoardAction::Place { tile_id: "tile-1".to_string(), position: Point::new(3, 4) })
    /// );
    /// assert_eq!(BoardAction::parse("reset"), Some(BoardAction::Reset));
    /// assert_eq!(BoardAction::parse("jump"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        let action = match parts.next()?.to_lowercase().as_str() {
            "shift" => BoardAction::Shift(ShiftDirection::from_str(parts.next()?)?),
            "rotate" => BoardAction::Rotate {
                tile_id: parts.next()?.to_string(),
            },
            "place" => {
                let tile_id = parts.next()?.to_string();
                let x = parts.next()?.parse().ok()?;
                let y = parts.next()?.parse().ok()?;
                BoardAction::Place {
                    tile_id,
                    position: Point::new(x, y),
                }
            }
            "reset" => BoardAction::Reset,
            _ => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(action)
    }
}

/// Complete state of one level being played
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    tiles: Vec<Tile>,
    sound: SoundSettings,
    drag: Option<DragState>,
}

impl Session {
    /// Start a session on a level
    ///
    /// The level goes through [`prepare_level`] first, so hand-built levels
    /// get padded grids and the same validation as loaded ones.
    pub fn new(level: Level) -> Result<Self, SessionError> {
        let level = prepare_level(level)?;
        let tiles = level.tiles.clone();
        Ok(Self {
            level,
            tiles,
            sound: SoundSettings::default(),
            drag: None,
        })
    }

    /// Parse a level from JSON and start a session on it
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let level: Level = serde_json::from_str(json).map_err(LevelError::from)?;
        Self::new(level)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn board_size(&self) -> usize {
        self.level.grid_size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn sound(&self) -> &SoundSettings {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut SoundSettings {
        &mut self.sound
    }

    fn tile_index(&self, id: &str) -> Result<usize, SessionError> {
        self.tiles
            .iter()
            .position(|tile| tile.id == id)
            .ok_or_else(|| SessionError::UnknownTile(id.to_string()))
    }

    /// Current board snapshot
    pub fn board(&self) -> Result<Grid, SessionError> {
        Ok(compose_board(&self.tiles, self.board_size())?)
    }

    /// Board snapshot without one tile, for validating that tile's moves
    pub fn board_without(&self, id: &str) -> Result<Grid, SessionError> {
        self.tile_index(id)?;
        Ok(compose_board_without(&self.tiles, self.board_size(), id)?)
    }

    /// Words currently spelled on the board
    pub fn words(&self) -> Result<Vec<WordResult>, SessionError> {
        Ok(find_words(&self.board()?))
    }

    /// True when the board spells exactly the level's target words
    pub fn is_solved(&self) -> Result<bool, SessionError> {
        Ok(is_solved(&self.words()?, self.level.target_words()))
    }

    /// Outline of a tile in its current orientation, in tile-local grid units
    pub fn outline(&self, id: &str) -> Result<Vec<Point>, SessionError> {
        let index = self.tile_index(id)?;
        Ok(outline(&oriented_grid(&self.tiles[index])?))
    }

    /// Check whether a tile would fit at `position`
    pub fn placement(&self, id: &str, position: Point) -> Result<PlacementResult, SessionError> {
        let index = self.tile_index(id)?;
        let grid = oriented_grid(&self.tiles[index])?;
        let board = self.board_without(id)?;
        Ok(can_place(&grid, position, &board))
    }

    /// Apply an action
    ///
    /// Returns whether the tile layout changed.
    pub fn apply_action(&mut self, action: BoardAction) -> Result<bool, SessionError> {
        debug!(?action, "apply action");
        match action {
            BoardAction::Rotate { tile_id } => self.rotate_tile(&tile_id),
            BoardAction::Shift(direction) => {
                let size = self.board_size();
                let outcome = shift_tiles(&mut self.tiles, direction, size)?;
                Ok(outcome.moved > 0)
            }
            BoardAction::Place { tile_id, position } => self.place_tile(&tile_id, position),
            BoardAction::Reset => {
                let changed = self.tiles != self.level.tiles;
                self.tiles = self.level.tiles.clone();
                self.drag = None;
                Ok(changed)
            }
        }
    }

    fn rotate_tile(&mut self, id: &str) -> Result<bool, SessionError> {
        let index = self.tile_index(id)?;
        let board = self.board_without(id)?;
        Ok(rotate_in_place(&mut self.tiles[index], &board)?.is_some())
    }

    fn place_tile(&mut self, id: &str, position: Point) -> Result<bool, SessionError> {
        let index = self.tile_index(id)?;
        if self.tiles[index].position == position {
            return Ok(false);
        }
        let placement = self.placement(id, position)?;
        if !placement.can_place() {
            debug!(tile = id, ?position, reason = placement.reason(), "placement rejected");
            return Ok(false);
        }
        self.tiles[index].position = position;
        Ok(true)
    }

    /// Id of the tile being dragged, if any
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.tile_id.as_str())
    }

    /// Start dragging a tile from pointer position `pointer`
    ///
    /// `scale` must count one unit per board cell.
    pub fn begin_drag(
        &mut self,
        tile_id: &str,
        pointer: PixelPoint,
        scale: BoardScale,
    ) -> Result<(), SessionError> {
        let index = self.tile_index(tile_id)?;
        self.drag = Some(DragState {
            tile_id: tile_id.to_string(),
            start_pointer: pointer,
            start_position: self.tiles[index].position,
            scale,
            last_shadow: None,
        });
        Ok(())
    }

    /// Start dragging whichever tile has a letter within `threshold` pixels
    /// of the board-relative point `point`
    ///
    /// Returns the id of the picked tile.
    pub fn begin_drag_at(
        &mut self,
        point: PixelPoint,
        threshold: f64,
        scale: BoardScale,
    ) -> Result<Option<String>, SessionError> {
        let picked = nearest_tile_cell(point, &self.tiles, threshold, scale)?
            .map(|nearest| nearest.tile.id.clone());
        if let Some(tile_id) = &picked {
            self.begin_drag(tile_id, point, scale)?;
        }
        Ok(picked)
    }

    /// Follow the pointer, returning where the tile is drawn and would land
    pub fn drag_to(&mut self, pointer: PixelPoint) -> Result<DragPreview, SessionError> {
        let drag = self.drag.as_ref().ok_or(SessionError::NoDrag)?;
        let tile_id = drag.tile_id.clone();
        let scale = drag.scale;

        let delta = drag_delta(pointer, drag.start_pointer, scale);
        let unit_position = PixelPoint::new(
            f64::from(drag.start_position.x) + delta.x,
            f64::from(drag.start_position.y) + delta.y,
        );
        let ppu = scale.pixels_per_unit();
        let pixel_position = PixelPoint::new(unit_position.x * ppu, unit_position.y * ppu);

        let index = self.tile_index(&tile_id)?;
        let grid = oriented_grid(&self.tiles[index])?;
        let board = self.board_without(&tile_id)?;
        let shadow = shadow_position(pixel_position, &grid, &board, scale);
        let placement = can_place(&grid, shadow, &board);

        if let Some(drag) = self.drag.as_mut() {
            drag.last_shadow = Some((shadow, placement));
        }

        Ok(DragPreview {
            tile_id,
            unit_position,
            pixel_position,
            shadow,
            placement,
        })
    }

    /// Drop the dragged tile at its last valid shadow
    ///
    /// Returns the tile's final position, unchanged when the last shadow was
    /// invalid or the pointer never moved.
    pub fn end_drag(&mut self) -> Result<Point, SessionError> {
        let drag = self.drag.take().ok_or(SessionError::NoDrag)?;
        let index = self.tile_index(&drag.tile_id)?;

        if let Some((shadow, placement)) = drag.last_shadow {
            if placement.can_place() {
                self.tiles[index].position = shadow;
            }
        }

        let position = self.tiles[index].position;
        debug!(tile = %drag.tile_id, from = ?drag.start_position, to = ?position, "drag ended");
        Ok(position)
    }

    /// Abandon the current drag without moving anything
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
