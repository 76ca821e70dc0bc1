//! # Shapeboard Core
//!
//! Core types shared by every Shapeboard crate: the color palette, the
//! fill mode, canvas constants and the error taxonomy used by the board
//! engine and the persistence codec.

pub mod constants;
pub mod error;
pub mod style;

pub use error::{BoardError, CodecError, Error, RejectReason, Result};
pub use style::{Color, FillMode};
