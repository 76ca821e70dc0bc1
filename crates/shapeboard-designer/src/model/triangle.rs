use smallvec::smallvec;

use shapeboard_core::{Color, FillMode};

use super::{BoardShape, Bounds, Point, Sizes};
use crate::canvas::Canvas;

/// Isosceles triangle with its apex at `origin`, growing downward.
///
/// Row `i` spans `origin.x - i ..= origin.x + i`, so the base row is
/// `2 * height - 1` cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTriangle {
    pub origin: Point,
    pub height: i32,
    pub fill: FillMode,
    pub color: Color,
}

impl BoardTriangle {
    pub fn new(origin: Point, height: i32, fill: FillMode, color: Color) -> Self {
        Self {
            origin,
            height,
            fill,
            color,
        }
    }

    fn base_row(&self) -> i64 {
        self.origin.y as i64 + self.height as i64 - 1
    }
}

impl BoardShape for BoardTriangle {
    fn rasterize(&self, canvas: &mut Canvas) {
        let glyph = self.color.glyph();
        let (x, y) = (self.origin.x as i64, self.origin.y as i64);
        let height = self.height as i64;

        for row in canvas.rows(y, y + height) {
            let i = row - y;
            let (left, right) = (x - i, x + i);
            if self.fill.is_filled() {
                for col in canvas.columns(left, right + 1) {
                    canvas.plot(col, row, glyph);
                }
            } else {
                canvas.plot(left, row, glyph);
                if left != right {
                    canvas.plot(right, row, glyph);
                }
            }
        }

        if !self.fill.is_filled() {
            let base = self.base_row();
            for col in canvas.columns(x - height + 1, x + height) {
                canvas.plot(col, base, glyph);
            }
        }
    }

    fn is_occupied(&self, p: Point) -> bool {
        let row = p.y as i64 - self.origin.y as i64;
        if row < 0 || row >= self.height as i64 {
            return false;
        }
        let px = p.x as i64;
        let left = self.origin.x as i64 - row;
        let right = self.origin.x as i64 + row;
        if self.fill.is_filled() {
            left <= px && px <= right
        } else {
            // Any cell of the base row counts, not only the span under the triangle.
            px == left || px == right || p.y as i64 == self.base_row()
        }
    }

    fn bounds(&self) -> Bounds {
        let (x, y, height) = (
            self.origin.x as i64,
            self.origin.y as i64,
            self.height as i64,
        );
        Bounds::new(x - height + 1, y, x + height - 1, self.base_row())
    }

    fn sizes(&self) -> Sizes {
        smallvec![self.height]
    }
}
