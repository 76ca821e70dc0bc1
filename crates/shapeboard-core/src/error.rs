//! Error handling for Shapeboard
//!
//! Provides error types for each layer:
//! - Board errors (placement, selection, bookkeeping)
//! - Codec errors (one rejected line of a save file)
//!
//! Every board error is recoverable: the operation that produced it left
//! the board exactly as it was, and the `Display` output is the status line
//! shown to the user.

use thiserror::Error;

/// Why a shape could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The bounding box of the shape has no cell in common with the canvas
    OffBoard,
    /// A structurally equal shape is already on the board
    Duplicate,
    /// A size field is zero or negative
    Degenerate,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OffBoard => write!(f, "shape is outside the board"),
            Self::Duplicate => write!(f, "an identical shape already exists"),
            Self::Degenerate => write!(f, "shape sizes must be positive"),
        }
    }
}

/// Board error type
///
/// Represents the outcome of a board operation that could not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shape was not added or edited
    #[error("Placement rejected: {reason}")]
    PlacementRejected {
        /// The reason the placement failed.
        reason: RejectReason,
    },

    /// Operation needs a selected shape
    #[error("No shape selected")]
    SelectionRequired,

    /// Lookup matched nothing
    #[error("Shape not found: {target}")]
    NotFound {
        /// Description of what was looked up.
        target: String,
    },

    /// Nothing on the board to operate on
    #[error("Board is empty")]
    EmptyCollection,

    /// Size count does not match the selected shape
    #[error("{shape} expects {expected} size value(s), got {got}")]
    InvalidArguments {
        /// The shape type name.
        shape: String,
        /// Number of size values the shape takes.
        expected: usize,
        /// Number of size values supplied.
        got: usize,
    },

    /// Save file could not be read or written
    #[error("Cannot access {path}: {reason}")]
    Io {
        /// The path that failed.
        path: String,
        /// The reason reported by the operating system.
        reason: String,
    },
}

impl BoardError {
    /// Shorthand for a rejected placement.
    pub fn rejected(reason: RejectReason) -> Self {
        Self::PlacementRejected { reason }
    }

    /// Shorthand for a failed lookup.
    pub fn not_found(target: impl Into<String>) -> Self {
        Self::NotFound {
            target: target.into(),
        }
    }

    /// Wraps an I/O failure on `path`.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Codec error type
///
/// Represents a persistence line that could not be turned into a shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Line is empty
    #[error("Empty line")]
    Empty,

    /// Unknown shape type token
    #[error("Unknown shape type: {token}")]
    UnknownShape {
        /// The offending token.
        token: String,
    },

    /// A token could not be parsed
    #[error("Invalid {field}: {token}")]
    InvalidToken {
        /// Which field was being parsed.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// Wrong number of tokens for the shape type
    #[error("{shape} line needs {expected} tokens, got {got}")]
    TokenCount {
        /// The shape type name.
        shape: String,
        /// Expected token count.
        expected: usize,
        /// Actual token count.
        got: usize,
    },
}

/// Main error type for Shapeboard
#[derive(Error, Debug)]
pub enum Error {
    /// Board error
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Codec error
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a board error
    pub fn is_board_error(&self) -> bool {
        matches!(self, Error::Board(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
