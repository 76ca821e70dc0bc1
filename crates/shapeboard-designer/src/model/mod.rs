use smallvec::SmallVec;
use std::str::FromStr;

use shapeboard_core::{BoardError, Color, FillMode, RejectReason};

use crate::canvas::Canvas;

mod circle;
mod rectangle;
mod square;
mod triangle;

pub use circle::BoardCircle;
pub use rectangle::BoardRectangle;
pub use square::BoardSquare;
pub use triangle::BoardTriangle;

/// Size values of a shape, in the order they are written.
pub type Sizes = SmallVec<[i32; 2]>;

/// Integer cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Inclusive cell bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True when the box covers no cell at all.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// True when at least one cell of the box lies on a `width` x `height`
    /// canvas. Partial overlap counts.
    pub fn overlaps_canvas(&self, width: usize, height: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let width = i64::try_from(width).unwrap_or(i64::MAX);
        let height = i64::try_from(height).unwrap_or(i64::MAX);
        self.min_x < width && self.max_x >= 0 && self.min_y < height && self.max_y >= 0
    }
}

/// Per-variant geometry of a board shape.
pub trait BoardShape {
    /// Paints the shape onto `canvas`; cells off the canvas are skipped.
    fn rasterize(&self, canvas: &mut Canvas);

    /// Hit test used by coordinate selection.
    fn is_occupied(&self, p: Point) -> bool;

    /// Box used by placement validation.
    fn bounds(&self) -> Bounds;

    /// Size fields in written order.
    fn sizes(&self) -> Sizes;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Triangle,
    Rectangle,
    Square,
    Circle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Triangle,
        ShapeType::Rectangle,
        ShapeType::Square,
        ShapeType::Circle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }

    /// Names of the size fields, which also gives their count.
    pub fn size_names(&self) -> &'static [&'static str] {
        match self {
            Self::Triangle => &["height"],
            Self::Rectangle => &["width", "height"],
            Self::Square => &["side"],
            Self::Circle => &["radius"],
        }
    }

    pub fn size_arity(&self) -> usize {
        self.size_names().len()
    }

    /// What the anchor point means for this variant.
    pub fn anchor_name(&self) -> &'static str {
        match self {
            Self::Triangle => "apex",
            Self::Rectangle | Self::Square => "top-left corner",
            Self::Circle => "center",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown shape type '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Triangle(BoardTriangle),
    Rectangle(BoardRectangle),
    Square(BoardSquare),
    Circle(BoardCircle),
}

impl BoardShape for Shape {
    fn rasterize(&self, canvas: &mut Canvas) {
        match self {
            Shape::Triangle(s) => s.rasterize(canvas),
            Shape::Rectangle(s) => s.rasterize(canvas),
            Shape::Square(s) => s.rasterize(canvas),
            Shape::Circle(s) => s.rasterize(canvas),
        }
    }

    fn is_occupied(&self, p: Point) -> bool {
        match self {
            Shape::Triangle(s) => s.is_occupied(p),
            Shape::Rectangle(s) => s.is_occupied(p),
            Shape::Square(s) => s.is_occupied(p),
            Shape::Circle(s) => s.is_occupied(p),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Shape::Triangle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Square(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    fn sizes(&self) -> Sizes {
        match self {
            Shape::Triangle(s) => s.sizes(),
            Shape::Rectangle(s) => s.sizes(),
            Shape::Square(s) => s.sizes(),
            Shape::Circle(s) => s.sizes(),
        }
    }
}

impl Shape {
    /// Builds a shape of `shape_type` from its size values.
    ///
    /// Fails with [`BoardError::InvalidArguments`] when the number of sizes
    /// does not match the variant.
    pub fn build(
        shape_type: ShapeType,
        fill: FillMode,
        color: Color,
        origin: Point,
        sizes: &[i32],
    ) -> Result<Self, BoardError> {
        if sizes.len() != shape_type.size_arity() {
            return Err(BoardError::InvalidArguments {
                shape: shape_type.name().to_string(),
                expected: shape_type.size_arity(),
                got: sizes.len(),
            });
        }
        let shape = match shape_type {
            ShapeType::Triangle => {
                Shape::Triangle(BoardTriangle::new(origin, sizes[0], fill, color))
            }
            ShapeType::Rectangle => Shape::Rectangle(BoardRectangle::new(
                origin, sizes[0], sizes[1], fill, color,
            )),
            ShapeType::Square => Shape::Square(BoardSquare::new(origin, sizes[0], fill, color)),
            ShapeType::Circle => Shape::Circle(BoardCircle::new(origin, sizes[0], fill, color)),
        };
        Ok(shape)
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Square(_) => ShapeType::Square,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }

    pub fn origin(&self) -> Point {
        match self {
            Shape::Triangle(s) => s.origin,
            Shape::Rectangle(s) => s.origin,
            Shape::Square(s) => s.origin,
            Shape::Circle(s) => s.origin,
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Shape::Triangle(s) => s.origin = origin,
            Shape::Rectangle(s) => s.origin = origin,
            Shape::Square(s) => s.origin = origin,
            Shape::Circle(s) => s.origin = origin,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Triangle(s) => s.color,
            Shape::Rectangle(s) => s.color,
            Shape::Square(s) => s.color,
            Shape::Circle(s) => s.color,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Shape::Triangle(s) => s.color = color,
            Shape::Rectangle(s) => s.color = color,
            Shape::Square(s) => s.color = color,
            Shape::Circle(s) => s.color = color,
        }
    }

    pub fn fill(&self) -> FillMode {
        match self {
            Shape::Triangle(s) => s.fill,
            Shape::Rectangle(s) => s.fill,
            Shape::Square(s) => s.fill,
            Shape::Circle(s) => s.fill,
        }
    }

    /// Returns a copy of this shape carrying new size values.
    pub fn with_sizes(&self, sizes: &[i32]) -> Result<Self, BoardError> {
        Self::build(
            self.shape_type(),
            self.fill(),
            self.color(),
            self.origin(),
            sizes,
        )
    }

    /// Placement check shared by add and edit: sizes must be positive and
    /// the bounding box must touch the canvas.
    pub fn check_placement(&self, width: usize, height: usize) -> Result<(), BoardError> {
        if self.sizes().iter().any(|s| *s < 1) {
            return Err(BoardError::rejected(RejectReason::Degenerate));
        }
        if !self.bounds().overlaps_canvas(width, height) {
            return Err(BoardError::rejected(RejectReason::OffBoard));
        }
        Ok(())
    }
}

/// Textual description: `<fill> <type> <color> <x> <y> <size...>`.
impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let origin = self.origin();
        write!(
            f,
            "{} {} {} {} {}",
            self.fill(),
            self.shape_type(),
            self.color(),
            origin.x,
            origin.y
        )?;
        for size in self.sizes() {
            write!(f, " {}", size)?;
        }
        Ok(())
    }
}
