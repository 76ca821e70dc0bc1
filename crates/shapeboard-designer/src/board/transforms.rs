//! Edits of the selected shape (resize, recolor, move).

use shapeboard_core::{BoardError, Color};

use super::Board;
use crate::model::Point;
use crate::shape_store::ShapeId;

impl Board {
    fn require_selection(&self) -> Result<ShapeId, BoardError> {
        self.selection
            .selected_id()
            .filter(|id| self.store.contains(*id))
            .ok_or(BoardError::SelectionRequired)
    }

    /// Resizes the selected shape in place.
    ///
    /// Rectangles take `(width, Some(height))`, every other shape a single
    /// size. The resized shape must pass the same bounds check as a new
    /// shape at its current position; the duplicate check is not applied.
    pub fn edit(&mut self, size: i32, second: Option<i32>) -> Result<(), BoardError> {
        let id = self.require_selection()?;
        let (width, height) = (self.width(), self.height());
        let Some(shape) = self.store.get_mut(id) else {
            return Err(BoardError::SelectionRequired);
        };

        let sizes: Vec<i32> = std::iter::once(size).chain(second).collect();
        let resized = shape.with_sizes(&sizes)?;
        resized.check_placement(width, height)?;

        tracing::debug!("Resized shape {} to {}", id, resized);
        *shape = resized;
        Ok(())
    }

    /// Recolors the selected shape.
    pub fn paint(&mut self, color: Color) -> Result<(), BoardError> {
        let id = self.require_selection()?;
        if let Some(shape) = self.store.get_mut(id) {
            shape.set_color(color);
            tracing::debug!("Painted shape {} {}", id, color);
        }
        Ok(())
    }

    /// Moves the selected shape to `(x, y)` and brings it to the front.
    ///
    /// No bounds check is made, so a shape may leave the board entirely.
    /// The shape is brought to the front even when it does not move; the
    /// return value tells whether the position changed.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<bool, BoardError> {
        let id = self.require_selection()?;
        let target = Point::new(x, y);
        let mut moved = false;
        if let Some(shape) = self.store.get_mut(id) {
            if shape.origin() != target {
                shape.set_origin(target);
                moved = true;
            }
        }
        self.store.bring_to_front(id);
        tracing::debug!("Moved shape {} to ({}, {}), changed: {}", id, x, y, moved);
        Ok(moved)
    }
}
