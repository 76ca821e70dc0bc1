use smallvec::smallvec;

use shapeboard_core::{Color, FillMode};

use super::rectangle::CellBox;
use super::{BoardShape, Bounds, Point, Sizes};
use crate::canvas::Canvas;

/// Square anchored at its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSquare {
    pub origin: Point,
    pub side: i32,
    pub fill: FillMode,
    pub color: Color,
}

impl BoardSquare {
    pub fn new(origin: Point, side: i32, fill: FillMode, color: Color) -> Self {
        Self {
            origin,
            side,
            fill,
            color,
        }
    }
}

impl BoardShape for BoardSquare {
    fn rasterize(&self, canvas: &mut Canvas) {
        CellBox::new(self.origin, self.side, self.side).rasterize(
            canvas,
            self.fill,
            self.color.glyph(),
            true,
        );
    }

    fn is_occupied(&self, p: Point) -> bool {
        CellBox::new(self.origin, self.side, self.side).is_occupied(self.fill, p)
    }

    fn bounds(&self) -> Bounds {
        CellBox::new(self.origin, self.side, self.side).bounds()
    }

    fn sizes(&self) -> Sizes {
        smallvec![self.side]
    }
}
