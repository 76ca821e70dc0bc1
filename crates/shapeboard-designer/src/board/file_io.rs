//! File I/O operations (save, load) for the board.

use std::path::Path;

use shapeboard_core::BoardError;

use super::Board;
use crate::serialization::{decode_document, encode_shapes};

/// Outcome of loading a board file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Lines that became shapes
    pub loaded: usize,
    /// Non-blank lines rejected by the parser or by placement validation
    pub skipped: usize,
}

impl Board {
    /// Writes every shape, by ascending id, returning how many were saved.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, BoardError> {
        let path = path.as_ref();
        let content = encode_shapes(self.store.iter().map(|(_, shape)| shape));
        std::fs::write(path, content).map_err(|e| BoardError::io(path, &e))?;
        tracing::info!("Saved {} shapes to {}", self.len(), path.display());
        Ok(self.len())
    }

    /// Replaces the board with the shapes in `path`.
    ///
    /// The file is read before anything changes, so a missing or unreadable
    /// file leaves the board untouched. Otherwise the board is reset (ids
    /// restart at 1) and each line goes through the normal add path; lines
    /// that fail to parse or to place are skipped.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, BoardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BoardError::io(path, &e))?;

        self.store.reset();
        self.selection.clear();

        let mut report = LoadReport::default();
        for (line_no, decoded) in decode_document(&text) {
            let placed = decoded
                .map_err(|e| e.to_string())
                .and_then(|shape| self.add(shape).map_err(|e| e.to_string()));
            match placed {
                Ok(_) => report.loaded += 1,
                Err(reason) => {
                    tracing::warn!("Skipped {}:{}: {}", path.display(), line_no, reason);
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} shapes from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );
        Ok(report)
    }
}
