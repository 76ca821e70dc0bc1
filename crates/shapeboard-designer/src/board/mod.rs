//! Board engine: owns the shapes and applies every user operation.
//!
//! This module is split into submodules:
//! - `shapes`: add, remove, undo, clear, list
//! - `selection`: select by id or coordinate
//! - `transforms`: edit, paint, move
//! - `file_io`: save and load
//!
//! Every public operation either completes or leaves the board exactly as
//! it was and returns the [`BoardError`](shapeboard_core::BoardError)
//! describing why.

mod file_io;
mod selection;
mod shapes;
mod transforms;

pub use file_io::LoadReport;
pub use selection::Selector;

use shapeboard_core::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

use crate::canvas::Canvas;
use crate::model::{BoardShape, Shape};
use crate::selection_manager::SelectionManager;
use crate::shape_store::{ShapeId, ShapeStore};

/// Shape board.
#[derive(Debug, Clone)]
pub struct Board {
    store: ShapeStore,
    selection: SelectionManager,
    blank: Canvas,
}

impl Board {
    /// Creates an empty 80 x 25 board.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }

    /// Creates an empty board with a `width` x `height` canvas.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            store: ShapeStore::new(),
            selection: SelectionManager::new(),
            blank: Canvas::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.blank.width()
    }

    pub fn height(&self) -> usize {
        self.blank.height()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Ids in paint order, bottom first.
    pub fn render_order(&self) -> Vec<ShapeId> {
        self.store.draw_order_iter().collect()
    }

    /// Id the next successful add will receive.
    pub fn next_id(&self) -> ShapeId {
        self.store.next_id()
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selection.selected_id()
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    /// Rasterizes every shape in paint order onto a fresh copy of the
    /// blank canvas.
    pub fn rasterize(&self) -> Canvas {
        let mut canvas = self.blank.clone();
        for shape in self.store.iter_draw_order() {
            shape.rasterize(&mut canvas);
        }
        canvas
    }

    /// Framed text rendering of the board.
    pub fn draw(&self, colored: bool) -> String {
        self.rasterize().render(colored)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
