//! Fixed-size character grid that shapes are rasterized onto.

use std::ops::Range;

use shapeboard_core::constants::{
    ANSI_RESET, BLANK_CELL, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FRAME_HORIZONTAL,
    FRAME_VERTICAL, MAX_BOARD_DIMENSION,
};
use shapeboard_core::Color;

/// Character canvas.
///
/// The board keeps one blank canvas and clones it for every render, so a
/// canvas is never painted on across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a blank `width` x `height` canvas.
    ///
    /// Each dimension is clamped to [`MAX_BOARD_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.min(MAX_BOARD_DIMENSION);
        let height = height.min(MAX_BOARD_DIMENSION);
        let len = width.checked_mul(height).unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![BLANK_CELL; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns of `start..end` that lie on the canvas.
    pub fn columns(&self, start: i64, end: i64) -> Range<i64> {
        start.max(0)..end.min(self.width as i64)
    }

    /// Rows of `start..end` that lie on the canvas.
    pub fn rows(&self, start: i64, end: i64) -> Range<i64> {
        start.max(0)..end.min(self.height as i64)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Paints one cell. Cells off the canvas are silently skipped.
    pub fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = glyph;
        }
    }

    /// Character at `(x, y)`, `None` off the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_painted(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some_and(|c| c != BLANK_CELL)
    }

    /// Number of non-blank cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != BLANK_CELL).count()
    }

    /// One grid row as a string, without the frame. `None` below the last row.
    pub fn row_text(&self, y: usize) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(self.cells[start..start + self.width].iter().collect())
    }

    /// Renders the grid inside a frame.
    ///
    /// With `colored`, every cell holding a palette glyph is wrapped in the
    /// glyph's ANSI foreground escape and a reset.
    pub fn render(&self, colored: bool) -> String {
        let rule: String = std::iter::repeat(FRAME_HORIZONTAL)
            .take(self.width + 2)
            .collect();

        let mut out = String::with_capacity((self.width + 3) * (self.height + 2));
        out.push_str(&rule);
        out.push('\n');
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            out.push(FRAME_VERTICAL);
            for &cell in row {
                match Color::from_glyph(cell).and_then(|c| c.ansi_code()) {
                    Some(code) if colored => {
                        out.push_str(&format!("\x1b[{}m{}{}", code, cell, ANSI_RESET));
                    }
                    _ => out.push(cell),
                }
            }
            out.push(FRAME_VERTICAL);
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
