//! # Shapeboard Designer
//!
//! Board engine for placing simple shapes on a fixed-size character canvas
//! and rendering them as ASCII or ANSI-colored art.
//!
//! ## Core Components
//!
//! - **Shapes**: triangles, rectangles, squares and circles, each with its
//!   own rasterizer and hit test
//! - **Canvas**: character grid with clipping and framed rendering
//! - **Board**: id assignment, paint order, placement validation,
//!   selection and undo
//! - **Serialization**: line-oriented board files
//!
//! ## Architecture
//!
//! ```text
//! Board
//!   ├── ShapeStore (id -> Shape, paint order, id counter)
//!   ├── SelectionManager (selected id)
//!   └── Canvas (blank grid, cloned for every render)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapeboard_designer::{Board, Point, Shape, ShapeType};
//! use shapeboard_core::{Color, FillMode};
//!
//! let mut board = Board::new();
//! let circle = Shape::build(
//!     ShapeType::Circle,
//!     FillMode::Fill,
//!     Color::Red,
//!     Point::new(10, 10),
//!     &[5],
//! )
//! .unwrap();
//! let id = board.add(circle).unwrap();
//! assert_eq!(board.list(), vec![format!("{} fill circle red 10 10 5", id)]);
//! ```

pub mod board;
pub mod canvas;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;

pub use board::{Board, LoadReport, Selector};
pub use canvas::Canvas;
pub use model::{
    BoardCircle, BoardRectangle, BoardShape, BoardSquare, BoardTriangle, Bounds, Point, Shape,
    ShapeType,
};
pub use shape_store::ShapeId;
