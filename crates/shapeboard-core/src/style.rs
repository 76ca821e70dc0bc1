//! Visual style of a shape: its palette color and whether it is filled.

use std::str::FromStr;

use crate::constants::DEFAULT_MARK;

/// Palette color of a shape.
///
/// Every color maps to a single glyph painted on the canvas and,
/// separately, to a terminal foreground code used by colored rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    #[default]
    Default,
}

impl Color {
    /// All palette entries, in display order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Default,
    ];

    /// Lowercase palette name, as written in commands and save files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Default => "default",
        }
    }

    /// Glyph painted on the canvas: the first letter of the name, or the
    /// plain mark for the default color.
    pub fn glyph(&self) -> char {
        match self {
            Self::Default => DEFAULT_MARK,
            other => other.name().chars().next().unwrap_or(DEFAULT_MARK),
        }
    }

    /// ANSI foreground code, `None` for the default color.
    pub fn ansi_code(&self) -> Option<u8> {
        match self {
            Self::Red => Some(31),
            Self::Green => Some(32),
            Self::Yellow => Some(33),
            Self::Blue => Some(34),
            Self::Default => None,
        }
    }

    /// Recovers the color that paints `glyph`.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.glyph() == glyph)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown color '{}'", s))
    }
}

/// Whether a shape is painted solid or as an outline only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Every interior cell is painted.
    Fill,
    /// Only boundary cells are painted.
    #[default]
    Frame,
}

impl FillMode {
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Fill)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Frame => "frame",
        }
    }
}

impl From<bool> for FillMode {
    fn from(filled: bool) -> Self {
        if filled {
            Self::Fill
        } else {
            Self::Frame
        }
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fill") {
            Ok(Self::Fill)
        } else if s.eq_ignore_ascii_case("frame") {
            Ok(Self::Frame)
        } else {
            Err(format!("unknown fill mode '{}'", s))
        }
    }
}
