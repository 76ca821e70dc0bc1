//! Canvas dimensions and frame characters.

/// Default canvas width in character cells.
pub const DEFAULT_BOARD_WIDTH: usize = 80;

/// Default canvas height in character cells.
pub const DEFAULT_BOARD_HEIGHT: usize = 25;

/// Largest accepted canvas width or height.
pub const MAX_BOARD_DIMENSION: usize = 1000;

/// Character of an unpainted cell.
pub const BLANK_CELL: char = ' ';

/// Mark painted by shapes using the `default` color.
pub const DEFAULT_MARK: char = '*';

/// Character of the top and bottom frame rows.
pub const FRAME_HORIZONTAL: char = '-';

/// Character enclosing each grid row.
pub const FRAME_VERTICAL: char = '|';

/// Escape sequence restoring the terminal's default foreground.
pub const ANSI_RESET: &str = "\x1b[0m";
