//! Nesting confirmed headings under their enclosing headings.
//!
//! The builder keeps the chain of headings that are still open, innermost last. A new heading
//! closes every open heading at its own level or deeper, takes whatever remains on top as its
//! parent, and becomes the new innermost scope. Skipped levels are tolerated: a sub-subsection
//! directly after a chapter simply nests under the chapter.

use crate::section::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A heading handed to a [`TagSink`].
pub struct Heading<'a, H> {
    /// Title text.
    pub title: &'a str,
    /// Heading depth.
    pub level: Level,
    /// Line of the title (1-indexed).
    pub line: usize,
    /// Handle of the enclosing heading, if any.
    pub parent: Option<H>,
}

/// Receiver of detected headings.
///
/// The sink owns storage and formatting; the scanner only keeps the returned handles to name
/// parents of later headings.
pub trait TagSink {
    /// Opaque reference to an emitted heading.
    type Handle: Copy;

    /// Store `heading` and return a handle to it.
    fn emit(&mut self, heading: Heading<'_, Self::Handle>) -> Self::Handle;

    /// Whether `handle` still refers to a stored heading.
    ///
    /// Scopes whose heading has been dropped by the sink are closed before the next heading is
    /// attached.
    fn is_live(&self, _handle: Self::Handle) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scope<H> {
    level: Level,
    handle: Option<H>,
}

#[derive(Debug, Clone)]
/// Open heading scopes for one document, strictly increasing in level from bottom to top.
pub struct HierarchyBuilder<H> {
    stack: Vec<Scope<H>>,
}

impl<H> Default for HierarchyBuilder<H> {
    fn default() -> Self {
        Self {
            stack: Vec::with_capacity(Level::ALL.len()),
        }
    }
}

impl<H: Copy> HierarchyBuilder<H> {
    #[must_use]
    /// A builder with no open scopes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon every open scope.
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    #[must_use]
    /// Levels of the open scopes, outermost first.
    pub fn open_levels(&self) -> Vec<Level> {
        self.stack.iter().map(|scope| scope.level).collect()
    }

    /// Attach a heading confirmed by an underline on `underline_line` and emit it to `sink`.
    ///
    /// The heading is reported at the title line, one above the underline. An empty title emits
    /// nothing but still opens a scope at `level`; having no heading behind it, that scope is closed
    /// by the next push. Returns the handle of the emitted heading.
    pub fn push<S>(
        &mut self,
        sink: &mut S,
        title: &str,
        level: Level,
        underline_line: usize,
    ) -> Option<H>
    where
        S: TagSink<Handle = H>,
    {
        while let Some(top) = self.stack.last() {
            let dead = top.handle.is_none_or(|handle| !sink.is_live(handle));
            if top.level >= level || dead {
                self.stack.pop();
            } else {
                break;
            }
        }
        let parent = self.stack.last().and_then(|scope| scope.handle);

        let handle = (!title.is_empty()).then(|| {
            sink.emit(Heading {
                title,
                level,
                line: underline_line.saturating_sub(1),
                parent,
            })
        });
        self.stack.push(Scope { level, handle });
        handle
    }
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
