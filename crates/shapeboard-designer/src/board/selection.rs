//! Shape selection for the board.

use shapeboard_core::BoardError;

use super::Board;
use crate::model::Point;
use crate::shape_store::ShapeId;

/// How `select` identifies a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Direct id lookup.
    Id(ShapeId),
    /// First shape, by ascending id, whose hit test matches the cell.
    At(Point),
}

impl Board {
    /// Selects a shape. On failure the previous selection stays.
    pub fn select(&mut self, selector: Selector) -> Result<ShapeId, BoardError> {
        let found = match selector {
            Selector::Id(id) => self.selection.select_id(&self.store, id),
            Selector::At(point) => self.selection.select_at(&self.store, point),
        };
        match (found, selector) {
            (Some(id), _) => {
                tracing::debug!("Selected shape {}", id);
                Ok(id)
            }
            (None, Selector::Id(id)) => Err(BoardError::not_found(format!("id {}", id))),
            (None, Selector::At(p)) => {
                Err(BoardError::not_found(format!("nothing at ({}, {})", p.x, p.y)))
            }
        }
    }
}
