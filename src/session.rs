//! Interactive board session.
//!
//! A [`Session`] owns a [`Board`] and turns each input line into exactly one
//! board call, reporting the result as plain status lines. It never reads
//! input or prints by itself, so the binary decides where lines go.

use std::path::{Path, PathBuf};

use shapeboard_core::BoardError;
use shapeboard_designer::{Board, Selector, Shape, ShapeType};
use shapeboard_settings::Config;

use crate::commands::{Command, CommandError, HELP};

/// Result of one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Status or output lines, without trailing newlines
    pub lines: Vec<String>,
    /// The user asked to leave
    pub exit: bool,
}

impl Outcome {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            exit: false,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

/// Line-oriented front end for a board.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    colored: bool,
    default_file: PathBuf,
}

impl Session {
    pub fn new(board: Board, colored: bool, default_file: impl Into<PathBuf>) -> Self {
        Self {
            board,
            colored,
            default_file: default_file.into(),
        }
    }

    /// Session over an empty board sized and styled from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Board::with_size(config.board.width, config.board.height),
            config.render.color,
            config.storage.default_file.clone(),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one input line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(Some(command)) => self.run(command),
            Ok(None) => Outcome::default(),
            Err(err) => {
                tracing::debug!("Rejected input {:?}: {}", line, err);
                Outcome::line(err.to_string())
            }
        }
    }

    fn run(&mut self, command: Command) -> Outcome {
        match command {
            Command::Draw => Outcome::lines(
                self.board
                    .draw(self.colored)
                    .lines()
                    .map(str::to_string)
                    .collect(),
            ),
            Command::List => {
                let lines = self.board.list();
                if lines.is_empty() {
                    Outcome::line(BoardError::EmptyCollection.to_string())
                } else {
                    Outcome::lines(lines)
                }
            }
            Command::Shapes => Outcome::lines(ShapeType::ALL.iter().map(describe_type).collect()),
            Command::Add {
                fill,
                color,
                shape_type,
                origin,
                sizes,
            } => {
                let added = Shape::build(shape_type, fill, color, origin, &sizes)
                    .and_then(|shape| self.board.add(shape));
                report(added.map(|id| format!("Added shape {}", id)))
            }
            Command::SelectId(id) => self.select(Selector::Id(id)),
            Command::SelectAt(point) => self.select(Selector::At(point)),
            Command::Remove => report(
                self.board
                    .remove()
                    .map(|id| format!("Removed shape {}", id)),
            ),
            Command::Edit { size, second } => self.edit(size, second),
            Command::Paint(color) => report(
                self.board
                    .paint(color)
                    .map(|()| format!("Painted shape {}", color)),
            ),
            Command::Move(target) => match self.board.move_to(target.x, target.y) {
                Ok(true) => Outcome::line(format!("Moved shape to ({}, {})", target.x, target.y)),
                Ok(false) => Outcome::default(),
                Err(err) => Outcome::line(err.to_string()),
            },
            Command::Undo => report(
                self.board
                    .undo()
                    .map(|id| format!("Undid add of shape {}", id)),
            ),
            Command::Clear => report(
                self.board
                    .clear()
                    .map(|count| format!("Cleared {} shape(s)", count)),
            ),
            Command::Save(path) => {
                let path = self.path_or_default(path);
                report(
                    self.board
                        .save(&path)
                        .map(|count| format!("Saved {} shape(s) to {}", count, path.display())),
                )
            }
            Command::Load(path) => {
                let path = self.path_or_default(path);
                report(self.board.load(&path).map(|r| {
                    format!(
                        "Loaded {} shape(s) from {} ({} skipped)",
                        r.loaded,
                        path.display(),
                        r.skipped
                    )
                }))
            }
            Command::Help => Outcome::lines(
                HELP.iter()
                    .map(|(usage, summary)| format!("{:<58} {}", usage, summary))
                    .collect(),
            ),
            Command::Exit => Outcome {
                lines: Vec::new(),
                exit: true,
            },
        }
    }

    fn select(&mut self, selector: Selector) -> Outcome {
        report(
            self.board
                .select(selector)
                .map(|id| format!("Selected shape {}", id)),
        )
    }

    fn edit(&mut self, size: i32, second: Option<i32>) -> Outcome {
        if let Some(shape_type) = self.board.selected().map(Shape::shape_type) {
            let got = 1 + usize::from(second.is_some());
            if got != shape_type.size_arity() {
                return Outcome::line(
                    CommandError::Arity {
                        shape: shape_type.name(),
                        expected: shape_type.size_arity(),
                        got,
                    }
                    .to_string(),
                );
            }
        }
        report(self.board.edit(size, second).map(|()| "Resized shape".to_string()))
    }

    fn path_or_default(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.default_file.clone())
    }

    pub fn default_file(&self) -> &Path {
        &self.default_file
    }
}

fn report(result: Result<String, BoardError>) -> Outcome {
    Outcome::line(result.unwrap_or_else(|err| err.to_string()))
}

fn describe_type(shape_type: &ShapeType) -> String {
    format!(
        "{}: x y ({}) {}",
        shape_type.name(),
        shape_type.anchor_name(),
        shape_type.size_names().join(" ")
    )
}
