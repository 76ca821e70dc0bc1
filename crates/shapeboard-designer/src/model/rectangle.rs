use smallvec::smallvec;

use shapeboard_core::{Color, FillMode};

use super::{BoardShape, Bounds, Point, Sizes};
use crate::canvas::Canvas;

/// Axis-aligned rectangle anchored at its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRectangle {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
    pub fill: FillMode,
    pub color: Color,
}

impl BoardRectangle {
    pub fn new(origin: Point, width: i32, height: i32, fill: FillMode, color: Color) -> Self {
        Self {
            origin,
            width,
            height,
            fill,
            color,
        }
    }
}

/// Cell box shared by rectangles and squares.
#[derive(Debug, Clone, Copy)]
pub(super) struct CellBox {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl CellBox {
    pub(super) fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            x: origin.x as i64,
            y: origin.y as i64,
            width: width as i64,
            height: height as i64,
        }
    }

    fn right(&self) -> i64 {
        self.x + self.width - 1
    }

    fn bottom(&self) -> i64 {
        self.y + self.height - 1
    }

    /// Paints the block, or its border when not filled.
    ///
    /// With `skip_corners` the side columns only cover rows
    /// `1..height - 1`, leaving the corners to the top and bottom rows.
    pub(super) fn rasterize(
        &self,
        canvas: &mut Canvas,
        fill: FillMode,
        glyph: char,
        skip_corners: bool,
    ) {
        if fill.is_filled() {
            for row in canvas.rows(self.y, self.y + self.height) {
                for col in canvas.columns(self.x, self.x + self.width) {
                    canvas.plot(col, row, glyph);
                }
            }
            return;
        }

        for col in canvas.columns(self.x, self.x + self.width) {
            canvas.plot(col, self.y, glyph);
            canvas.plot(col, self.bottom(), glyph);
        }
        let (first, last) = if skip_corners {
            (self.y + 1, self.y + self.height - 1)
        } else {
            (self.y, self.y + self.height)
        };
        for row in canvas.rows(first, last) {
            canvas.plot(self.x, row, glyph);
            canvas.plot(self.right(), row, glyph);
        }
    }

    pub(super) fn is_occupied(&self, fill: FillMode, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let inside = self.x <= px && px <= self.right() && self.y <= py && py <= self.bottom();
        if fill.is_filled() {
            inside
        } else {
            inside && (px == self.x || px == self.right() || py == self.y || py == self.bottom())
        }
    }

    pub(super) fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.right(), self.bottom())
    }
}

impl BoardShape for BoardRectangle {
    fn rasterize(&self, canvas: &mut Canvas) {
        CellBox::new(self.origin, self.width, self.height).rasterize(
            canvas,
            self.fill,
            self.color.glyph(),
            false,
        );
    }

    fn is_occupied(&self, p: Point) -> bool {
        CellBox::new(self.origin, self.width, self.height).is_occupied(self.fill, p)
    }

    fn bounds(&self) -> Bounds {
        CellBox::new(self.origin, self.width, self.height).bounds()
    }

    fn sizes(&self) -> Sizes {
        smallvec![self.width, self.height]
    }
}
