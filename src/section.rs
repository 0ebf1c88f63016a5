//! Section representation for underline-titled documents.
//!
//! A section represents a hierarchical division of a document, introduced by a title line and the
//! punctuation underline beneath it. Sections track their position in the document tree through
//! parent/child indices, and an [`Outline`] collects them as the scanner emits headings.

use crate::hierarchy::{Heading, TagSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Heading depth, fixed in meaning whichever underline character a document uses for it.
pub enum Level {
    /// Outermost division (level 0).
    Chapter,
    /// Level 1.
    Section,
    /// Level 2.
    Subsection,
    /// Innermost division (level 3).
    Subsubsection,
}

impl Level {
    /// Every level, outermost first.
    pub const ALL: [Self; 4] = [
        Self::Chapter,
        Self::Section,
        Self::Subsection,
        Self::Subsubsection,
    ];

    #[must_use]
    /// Level at depth `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    /// Depth of this level, 0 for chapters.
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    /// Lowercase name used in output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
        }
    }

    #[must_use]
    /// Single-letter kind written in tag files.
    pub fn kind_letter(self) -> char {
        match self {
            Self::Chapter => 'n',
            Self::Section => 'm',
            Self::Subsection => 'd',
            Self::Subsubsection => 'v',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One detected heading with its place in the document tree.
pub struct Section {
    /// Title text, lossily decoded if the line was not UTF-8.
    pub title: String,
    /// Depth in the document hierarchy.
    pub level: Level,
    /// Line of the title (1-indexed), one above its underline.
    pub line: usize,
    /// Source file containing this section.
    pub file_path: String,
    /// Index of the containing section in the outline.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Sections of a single document in the order they appear.
pub struct Outline {
    /// Document the sections were read from.
    pub file_path: String,
    /// Every heading, parents always before their children.
    pub sections: Vec<Section>,
}

impl Outline {
    #[must_use]
    /// An empty outline for the document at `file_path`.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    /// Number of headings collected.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether no heading was found.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Indices of sections without a parent.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.parent_index.is_none())
            .map(|(index, _)| index)
    }

    #[must_use]
    /// Indices of the sections directly under `index`.
    pub fn children(&self, index: usize) -> &[usize] {
        self.sections
            .get(index)
            .map_or(&[], |section| section.children_indices.as_slice())
    }

    /// Indices of the enclosing sections of `index`, innermost first.
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(
            self.sections.get(index).and_then(|s| s.parent_index),
            move |&parent| self.sections.get(parent).and_then(|s| s.parent_index),
        )
    }

    #[must_use]
    /// Number of enclosing sections; differs from the level when levels are skipped.
    pub fn depth(&self, index: usize) -> usize {
        self.ancestors(index).count()
    }
}

impl TagSink for Outline {
    type Handle = usize;

    fn emit(&mut self, heading: Heading<'_, usize>) -> usize {
        let index = self.sections.len();
        trace!(
            title = heading.title,
            level = heading.level.name(),
            line = heading.line,
            parent = ?heading.parent,
            "heading"
        );
        self.sections.push(Section {
            title: heading.title.to_string(),
            level: heading.level,
            line: heading.line,
            file_path: self.file_path.clone(),
            parent_index: heading.parent,
            children_indices: Vec::new(),
        });
        if let Some(parent) = heading.parent.and_then(|p| self.sections.get_mut(p)) {
            parent.children_indices.push(index);
        }
        index
    }

    fn is_live(&self, handle: usize) -> bool {
        handle < self.sections.len()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
