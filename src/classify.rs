//! Underline characters to heading levels, in order of first appearance.
//!
//! Underline-titled documents have no fixed meaning for `=` or `-`. Whichever punctuation
//! character underlines the first heading becomes the chapter marker, the next new one marks
//! sections, and so on down to sub-subsections. A fifth distinct character has no level left and
//! is not a heading marker at all.

use crate::section::Level;
use tracing::debug;

/// Number of distinct underline characters a document can use.
pub const CAPACITY: usize = Level::ALL.len();

#[derive(Debug, Default, Clone)]
/// Append-only table assigning levels to underline bytes as they are first seen.
pub struct LevelAssignment {
    chars: Vec<u8>,
}

impl LevelAssignment {
    #[must_use]
    /// An empty table, as at the start of a document.
    pub fn new() -> Self {
        Self {
            chars: Vec::with_capacity(CAPACITY),
        }
    }

    /// Forget every assignment so the next document starts afresh.
    pub fn reset(&mut self) {
        self.chars.clear();
    }

    /// Level for the underline byte `c`, assigning the next free level if `c` is new.
    ///
    /// Returns `None` for bytes that are not ASCII punctuation and for unseen bytes once all
    /// levels are taken. A byte keeps its level for the rest of the document.
    pub fn classify(&mut self, c: u8) -> Option<Level> {
        if !c.is_ascii_punctuation() {
            return None;
        }
        if let Some(index) = self.chars.iter().position(|&seen| seen == c) {
            return Level::from_index(index);
        }
        if self.chars.len() == CAPACITY {
            debug!(
                underline = %char::from(c),
                "no heading level left for underline character"
            );
            return None;
        }
        let level = Level::from_index(self.chars.len())?;
        self.chars.push(c);
        debug!(underline = %char::from(c), level = level.name(), "assigned underline character");
        Some(level)
    }

    #[must_use]
    /// Underline bytes in assignment order; position is the level index.
    pub fn assigned(&self) -> &[u8] {
        &self.chars
    }
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
