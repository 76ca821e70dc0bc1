//! Serialization and deserialization for board files.
//!
//! A board file holds one shape per line, whitespace separated:
//!
//! ```text
//! <fill|frame> <type> <color> <x> <y> <size1> [<size2>]
//! ```
//!
//! Only rectangles carry a second size (width then height). The format
//! keeps no ids, selection or paint order.

use shapeboard_core::{CodecError, Color, FillMode};

use crate::model::{Point, Shape, ShapeType};

/// Tokens before the size values.
const FIXED_TOKENS: usize = 5;

/// One line describing `shape`.
pub fn encode_shape(shape: &Shape) -> String {
    shape.to_string()
}

/// Encodes shapes one per line, each line newline terminated.
pub fn encode_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> String {
    shapes
        .into_iter()
        .map(|shape| format!("{}\n", encode_shape(shape)))
        .collect()
}

/// Parses one line back into a shape.
///
/// Only the syntax is checked here; placement rules are applied by the
/// board when the shape is added.
pub fn decode_line(line: &str) -> Result<Shape, CodecError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (fill_token, type_token) = match tokens.as_slice() {
        [] => return Err(CodecError::Empty),
        [fill, kind, ..] => (*fill, *kind),
        [only] => {
            return Err(CodecError::InvalidToken {
                field: "shape type",
                token: only.to_string(),
            })
        }
    };

    let fill: FillMode = fill_token.parse().map_err(|_| CodecError::InvalidToken {
        field: "fill mode",
        token: fill_token.to_string(),
    })?;
    let shape_type: ShapeType = type_token.parse().map_err(|_| CodecError::UnknownShape {
        token: type_token.to_string(),
    })?;

    let expected = FIXED_TOKENS + shape_type.size_arity();
    if tokens.len() != expected {
        return Err(CodecError::TokenCount {
            shape: shape_type.name().to_string(),
            expected,
            got: tokens.len(),
        });
    }

    let color: Color = tokens[2].parse().map_err(|_| CodecError::InvalidToken {
        field: "color",
        token: tokens[2].to_string(),
    })?;
    let x = parse_number("x", tokens[3])?;
    let y = parse_number("y", tokens[4])?;
    let sizes = tokens[FIXED_TOKENS..]
        .iter()
        .map(|token| parse_number("size", token))
        .collect::<Result<Vec<_>, _>>()?;

    Shape::build(shape_type, fill, color, Point::new(x, y), &sizes).map_err(|_| {
        CodecError::TokenCount {
            shape: shape_type.name().to_string(),
            expected,
            got: tokens.len(),
        }
    })
}

/// Parses every non-blank line of `text`.
///
/// Each entry carries the 1-based line number so callers can report
/// which lines were skipped.
pub fn decode_document(text: &str) -> Vec<(usize, Result<Shape, CodecError>)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, decode_line(line)))
        .collect()
}

fn parse_number(field: &'static str, token: &str) -> Result<i32, CodecError> {
    token.parse().map_err(|_| CodecError::InvalidToken {
        field,
        token: token.to_string(),
    })
}
