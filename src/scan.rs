//! Single-pass scan of one document from line source to tag sink.

use crate::detect::{Detection, HeadingDetector};
use crate::hierarchy::{HierarchyBuilder, TagSink};
use tracing::debug;

#[derive(Debug, Clone)]
/// Detector and scope stack for scanning documents one at a time.
///
/// Every call to [`Scanner::scan`] starts from a clean state, so one scanner can be reused across
/// documents without underline assignments or open scopes leaking between them.
pub struct Scanner<H> {
    detector: HeadingDetector,
    hierarchy: HierarchyBuilder<H>,
}

impl<H> Default for Scanner<H> {
    fn default() -> Self {
        Self {
            detector: HeadingDetector::default(),
            hierarchy: HierarchyBuilder::default(),
        }
    }
}

impl<H: Copy> Scanner<H> {
    #[must_use]
    /// A scanner ready for its first document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every line of a document through the detector and emit its headings to `sink`.
    ///
    /// Lines come without their trailing newline and are numbered from 1. Returns the number of
    /// headings emitted. Scopes still open at the end of input are dropped without notice.
    pub fn scan<I, S>(&mut self, lines: I, sink: &mut S) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
        S: TagSink<Handle = H>,
    {
        self.detector.reset();
        self.hierarchy.reset();

        let mut emitted = 0;
        let mut line_count = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            line_count = line_number;
            if let Detection::Underline(level) = self.detector.feed(line.as_ref()) {
                let title = String::from_utf8_lossy(self.detector.candidate().text());
                if self
                    .hierarchy
                    .push(sink, &title, level, line_number)
                    .is_some()
                {
                    emitted += 1;
                }
            }
        }
        debug!(
            lines = line_count,
            headings = emitted,
            underlines = %String::from_utf8_lossy(self.detector.levels().assigned()),
            "scanned document"
        );
        emitted
    }
}

/// Scan one document with fresh state, emitting its headings to `sink`.
pub fn scan<I, S>(lines: I, sink: &mut S) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
    S: TagSink,
{
    Scanner::<S::Handle>::new().scan(lines, sink)
}

#[cfg(test)]
#[path = "tests/scan.rs"]
mod tests;
