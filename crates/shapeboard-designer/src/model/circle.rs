use smallvec::smallvec;

use shapeboard_core::{Color, FillMode};

use super::{BoardShape, Bounds, Point, Sizes};
use crate::canvas::Canvas;

/// Circle centered on `origin`.
///
/// The outline is drawn as the annulus `r² - r <= d <= r² + r` while the
/// hit test uses `(r - 1)² <= d <= r²`. The two bands differ and both are
/// observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCircle {
    pub origin: Point,
    pub radius: i32,
    pub fill: FillMode,
    pub color: Color,
}

impl BoardCircle {
    pub fn new(origin: Point, radius: i32, fill: FillMode, color: Color) -> Self {
        Self {
            origin,
            radius,
            fill,
            color,
        }
    }

    fn squared_distance(&self, x: i64, y: i64) -> i64 {
        let dx = x - self.origin.x as i64;
        let dy = y - self.origin.y as i64;
        dx * dx + dy * dy
    }
}

impl BoardShape for BoardCircle {
    fn rasterize(&self, canvas: &mut Canvas) {
        let glyph = self.color.glyph();
        let (cx, cy) = (self.origin.x as i64, self.origin.y as i64);
        let r = self.radius as i64;
        let r2 = r * r;

        for col in canvas.columns(cx - r, cx + r + 1) {
            for row in canvas.rows(cy - r, cy + r + 1) {
                let d = self.squared_distance(col, row);
                let painted = if self.fill.is_filled() {
                    d <= r2
                } else {
                    r2 - r <= d && d <= r2 + r
                };
                if painted {
                    canvas.plot(col, row, glyph);
                }
            }
        }
    }

    fn is_occupied(&self, p: Point) -> bool {
        let d = self.squared_distance(p.x as i64, p.y as i64);
        let r = self.radius as i64;
        if self.fill.is_filled() {
            d <= r * r
        } else {
            (r - 1) * (r - 1) <= d && d <= r * r
        }
    }

    fn bounds(&self) -> Bounds {
        let (cx, cy) = (self.origin.x as i64, self.origin.y as i64);
        let r = self.radius as i64;
        Bounds::new(cx - r, cy - r, cx + r, cy + r)
    }

    fn sizes(&self) -> Sizes {
        smallvec![self.radius]
    }
}
