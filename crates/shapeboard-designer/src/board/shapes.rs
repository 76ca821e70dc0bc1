//! Shape operations (add, remove, undo, clear, list) for the board.

use shapeboard_core::{BoardError, RejectReason};

use super::Board;
use crate::model::Shape;
use crate::shape_store::ShapeId;

impl Board {
    /// Validates and places a shape, returning its new id.
    ///
    /// Rejected when a structurally equal shape already exists, when a size
    /// is not positive, or when its bounding box misses the canvas
    /// entirely. Shapes hanging partly off an edge are accepted.
    pub fn add(&mut self, shape: Shape) -> Result<ShapeId, BoardError> {
        if self.store.iter().any(|(_, existing)| *existing == shape) {
            tracing::warn!("Rejected duplicate shape: {}", shape);
            return Err(BoardError::rejected(RejectReason::Duplicate));
        }
        if let Err(err) = shape.check_placement(self.width(), self.height()) {
            tracing::warn!("Rejected shape {}: {}", shape, err);
            return Err(err);
        }

        let id = self.store.generate_id();
        tracing::debug!("Added shape {} as id {}", shape, id);
        self.store.insert(id, shape);
        Ok(id)
    }

    /// Deletes the selected shape and clears the selection.
    pub fn remove(&mut self) -> Result<ShapeId, BoardError> {
        let id = self
            .selection
            .selected_id()
            .ok_or_else(|| BoardError::not_found("no shape is selected"))?;
        self.store.remove(id);
        self.selection.clear();
        tracing::debug!("Removed shape {}", id);
        Ok(id)
    }

    /// Reverses the most recent add.
    ///
    /// Removes the shape holding the last assigned id from both the id map
    /// and the paint order, then steps the id counter back. When that
    /// shape was already removed the board and the counter are left alone.
    pub fn undo(&mut self) -> Result<ShapeId, BoardError> {
        if self.store.is_empty() {
            return Err(BoardError::EmptyCollection);
        }
        let id = self
            .store
            .last_assigned_id()
            .filter(|id| self.store.contains(*id))
            .ok_or_else(|| BoardError::not_found("most recently added shape"))?;

        self.store.remove(id);
        self.store.release_last_id();
        self.selection.forget(id);
        tracing::debug!("Undid add of shape {}", id);
        Ok(id)
    }

    /// Removes every shape, returning how many there were.
    pub fn clear(&mut self) -> Result<usize, BoardError> {
        if self.store.is_empty() {
            return Err(BoardError::EmptyCollection);
        }
        let count = self.store.len();
        self.store.clear();
        self.selection.clear();
        tracing::debug!("Cleared {} shapes", count);
        Ok(count)
    }

    /// One `"<id> <description>"` line per shape, by ascending id.
    pub fn list(&self) -> Vec<String> {
        self.store
            .iter()
            .map(|(id, shape)| format!("{} {}", id, shape))
            .collect()
    }
}
