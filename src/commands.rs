//! Parsing of command lines typed at the board prompt.
//!
//! Every line maps to one [`Command`]. Parsing checks token counts and
//! token syntax only; board rules are applied when the command runs.

use std::path::PathBuf;

use shapeboard_core::{Color, FillMode};
use shapeboard_designer::{Point, ShapeType};
use thiserror::Error;

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draw,
    List,
    Shapes,
    Add {
        fill: FillMode,
        color: Color,
        shape_type: ShapeType,
        origin: Point,
        sizes: Vec<i32>,
    },
    SelectId(u64),
    SelectAt(Point),
    Remove,
    Edit {
        size: i32,
        second: Option<i32>,
    },
    Paint(Color),
    Move(Point),
    Undo,
    Clear,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Exit,
}

/// Why a command line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid {field}: {token}")]
    InvalidToken { field: &'static str, token: String },

    #[error("{shape} takes {expected} size value(s), got {got}")]
    Arity {
        shape: &'static str,
        expected: usize,
        got: usize,
    },
}

const ADD_USAGE: &str = "add <fill|frame> <color> <type> <x> <y> <size> [<size2>]";
const SELECT_USAGE: &str = "select <id> | select <x> <y>";
const EDIT_USAGE: &str = "edit <size> [<size2>]";
const PAINT_USAGE: &str = "paint <color>";
const MOVE_USAGE: &str = "move <x> <y>";
const SAVE_USAGE: &str = "save [<path>]";
const LOAD_USAGE: &str = "load [<path>]";

/// Usage and summary of every command, in `help` order.
pub const HELP: &[(&str, &str)] = &[
    ("draw", "render the board"),
    ("list", "list shapes by id"),
    ("shapes", "list shape types and their parameters"),
    (ADD_USAGE, "add a shape"),
    (SELECT_USAGE, "select a shape by id or by a cell it covers"),
    ("remove", "delete the selected shape"),
    (EDIT_USAGE, "resize the selected shape"),
    (PAINT_USAGE, "recolor the selected shape"),
    (MOVE_USAGE, "move the selected shape and bring it to the front"),
    ("undo", "remove the most recently added shape"),
    ("clear", "remove every shape"),
    (SAVE_USAGE, "write the board to a file"),
    (LOAD_USAGE, "replace the board with a file"),
    ("exit | quit", "leave"),
];

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "draw" => no_args(args, Self::Draw, "draw")?,
            "list" => no_args(args, Self::List, "list")?,
            "shapes" => no_args(args, Self::Shapes, "shapes")?,
            "remove" => no_args(args, Self::Remove, "remove")?,
            "undo" => no_args(args, Self::Undo, "undo")?,
            "clear" => no_args(args, Self::Clear, "clear")?,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            "add" => parse_add(args)?,
            "select" => match args {
                [id] => Self::SelectId(parse_field("id", id)?),
                [x, y] => Self::SelectAt(parse_point(x, y)?),
                _ => return Err(CommandError::Usage(SELECT_USAGE)),
            },
            "edit" => match args {
                [size] => Self::Edit {
                    size: parse_field("size", size)?,
                    second: None,
                },
                [size, second] => Self::Edit {
                    size: parse_field("size", size)?,
                    second: Some(parse_field("size", second)?),
                },
                _ => return Err(CommandError::Usage(EDIT_USAGE)),
            },
            "paint" => match args {
                [color] => Self::Paint(parse_field("color", color)?),
                _ => return Err(CommandError::Usage(PAINT_USAGE)),
            },
            "move" => match args {
                [x, y] => Self::Move(parse_point(x, y)?),
                _ => return Err(CommandError::Usage(MOVE_USAGE)),
            },
            "save" => Self::Save(optional_path(args, SAVE_USAGE)?),
            "load" => Self::Load(optional_path(args, LOAD_USAGE)?),
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(Some(command))
    }
}

fn no_args(args: &[&str], command: Command, usage: &'static str) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn parse_add(args: &[&str]) -> Result<Command, CommandError> {
    let [fill, color, kind, x, y, sizes @ ..] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    let shape_type: ShapeType = parse_field("shape type", kind)?;
    if sizes.len() != shape_type.size_arity() {
        return Err(CommandError::Arity {
            shape: shape_type.name(),
            expected: shape_type.size_arity(),
            got: sizes.len(),
        });
    }

    Ok(Command::Add {
        fill: parse_field("fill mode", fill)?,
        color: parse_field("color", color)?,
        shape_type,
        origin: parse_point(x, y)?,
        sizes: sizes
            .iter()
            .map(|token| parse_field("size", token))
            .collect::<Result<_, _>>()?,
    })
}

fn parse_point(x: &str, y: &str) -> Result<Point, CommandError> {
    Ok(Point::new(parse_field("x", x)?, parse_field("y", y)?))
}

fn parse_field<T: std::str::FromStr>(field: &'static str, token: &str) -> Result<T, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidToken {
        field,
        token: token.to_string(),
    })
}

fn optional_path(args: &[&str], usage: &'static str) -> Result<Option<PathBuf>, CommandError> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(PathBuf::from(path))),
        _ => Err(CommandError::Usage(usage)),
    }
}
