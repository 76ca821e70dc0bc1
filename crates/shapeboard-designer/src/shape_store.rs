//! Identity-keyed shape storage with a separate paint order.

use std::collections::BTreeMap;

use crate::model::Shape;

/// Stable shape identifier, assigned from 1 upward.
pub type ShapeId = u64;

/// Owns every shape on the board.
///
/// Shapes are keyed by id (iteration is by ascending id) while
/// `draw_order` holds the same ids in paint order, last painted on top.
/// Both structures always hold the same set of ids.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: BTreeMap<ShapeId, Shape>,
    draw_order: Vec<ShapeId>,
    next_id: ShapeId,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: BTreeMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Hands out the next id and advances the counter.
    pub fn generate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn next_id(&self) -> ShapeId {
        self.next_id
    }

    /// Most recently assigned id, if any was assigned.
    pub fn last_assigned_id(&self) -> Option<ShapeId> {
        (self.next_id > 1).then(|| self.next_id - 1)
    }

    /// Steps the counter back by one, making the last id available again.
    pub fn release_last_id(&mut self) {
        if self.next_id > 1 {
            self.next_id -= 1;
        }
    }

    /// Inserts a shape on top of the paint order.
    pub fn insert(&mut self, id: ShapeId, shape: Shape) {
        if self.shapes.insert(id, shape).is_some() {
            self.draw_order.retain(|other| *other != id);
        }
        self.draw_order.push(id);
    }

    /// Removes a shape from both the map and the paint order.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.draw_order.retain(|other| *other != id);
        Some(shape)
    }

    /// Moves `id` to the end of the paint order.
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if let Some(pos) = self.draw_order.iter().position(|other| *other == id) {
            let id = self.draw_order.remove(pos);
            self.draw_order.push(id);
        }
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Shapes by ascending id.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Ids in paint order.
    pub fn draw_order_iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.draw_order.iter().copied()
    }

    /// Shapes in paint order.
    pub fn iter_draw_order(&self) -> impl Iterator<Item = &Shape> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes every shape. The id counter keeps running.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
    }

    /// Removes every shape and restarts ids at 1.
    pub fn reset(&mut self) {
        self.clear();
        self.next_id = 1;
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
