//! # Shapeboard
//!
//! Terminal drawing board for simple shapes on a fixed-size character canvas.
//!
//! ## Architecture
//!
//! Shapeboard is organized as a workspace with multiple crates:
//!
//! 1. **shapeboard-core** - Error types, palette, fill mode, board constants
//! 2. **shapeboard-designer** - Shape model, canvas, board engine, board files
//! 3. **shapeboard-settings** - Configuration file handling
//! 4. **shapeboard** - Command parsing, interactive session and the binary
//!
//! ## Features
//!
//! - **Shapes**: triangles, rectangles, squares and circles, filled or outlined
//! - **Editing**: select by id or by cell, resize, recolor, move, undo
//! - **Rendering**: framed ASCII grid, optionally ANSI colored
//! - **Persistence**: one shape per line in a plain text file

pub mod commands;
pub mod session;

pub use shapeboard_core::{BoardError, CodecError, Color, Error, FillMode, Result};
pub use shapeboard_designer as designer;
pub use shapeboard_designer::{Board, LoadReport, Point, Selector, Shape, ShapeType};
pub use shapeboard_settings::Config;

pub use commands::{Command, CommandError};
pub use session::{Outcome, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the board
/// - RUST_LOG environment variable support, defaulting to `warn`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
