use crate::model::{BoardShape, Point};
use crate::shape_store::{ShapeId, ShapeStore};

/// Tracks the single selected shape.
///
/// The selection names a shape by id and never owns it. Ids are never
/// handed out twice while a shape is live, so an id is as good as a
/// reference; the board clears the selection whenever the shape it names
/// leaves the store.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeboard_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_id
    }

    /// Selects `id` if it is on the board. The selection is left alone
    /// otherwise.
    pub fn select_id(&mut self, store: &ShapeStore, id: ShapeId) -> Option<ShapeId> {
        if store.contains(id) {
            self.selected_id = Some(id);
            Some(id)
        } else {
            None
        }
    }

    /// Selects the lowest-id shape whose hit test matches `point`.
    ///
    /// Paint order plays no part: a shape drawn underneath another one is
    /// still picked first when its id is lower.
    pub fn select_at(&mut self, store: &ShapeStore, point: Point) -> Option<ShapeId> {
        let found = store
            .iter()
            .find(|(_, shape)| shape.is_occupied(point))
            .map(|(id, _)| id)?;
        self.selected_id = Some(found);
        Some(found)
    }

    /// Drops the selection if it names `id`.
    pub fn forget(&mut self, id: ShapeId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }
}
