//! Recognising underlined titles one line at a time.
//!
//! A heading is only known once the line after its title has been read, so the detector holds one
//! line of lookback: the title candidate. Each new line either confirms the candidate as a heading
//! (it is a long enough run of one punctuation character), clears it (it is blank) or replaces it.

use crate::classify::LevelAssignment;
use crate::measure::display_len;
use crate::section::Level;

#[derive(Debug, Default, Clone)]
/// The most recent text line that could still turn out to be a title.
pub struct TitleCandidate {
    text: Vec<u8>,
    display_len: usize,
}

impl TitleCandidate {
    /// Replace the held line with `line`.
    fn set(&mut self, line: &[u8]) {
        self.text.clear();
        self.text.extend_from_slice(line);
        self.display_len = display_len(line);
    }

    fn clear(&mut self) {
        self.text.clear();
        self.display_len = 0;
    }

    #[must_use]
    /// Raw bytes of the line.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[must_use]
    /// Width an underline must reach: code points for UTF-8, bytes otherwise.
    pub fn display_len(&self) -> usize {
        self.display_len
    }

    #[must_use]
    /// Whether no line is pending.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a line turned out to be.
pub enum Detection {
    /// The line underlines the pending candidate, which is a heading at this level.
    Underline(Level),
    /// The line is blank and nothing is pending any more.
    Blank,
    /// The line is now the pending candidate.
    Candidate,
}

#[derive(Debug, Default, Clone)]
/// Line-by-line heading recogniser for one document.
pub struct HeadingDetector {
    candidate: TitleCandidate,
    levels: LevelAssignment,
}

impl HeadingDetector {
    #[must_use]
    /// A detector in its start-of-document state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the candidate and every level assignment.
    pub fn reset(&mut self) {
        self.candidate.clear();
        self.levels.reset();
    }

    #[must_use]
    /// The pending title candidate.
    pub fn candidate(&self) -> &TitleCandidate {
        &self.candidate
    }

    #[must_use]
    /// Level assignments made so far in this document.
    pub fn levels(&self) -> &LevelAssignment {
        &self.levels
    }

    /// Classify the next line of the document.
    ///
    /// On [`Detection::Underline`] the candidate is left in place, so the title can be read from
    /// [`Self::candidate`]. A run of a fifth distinct underline character is treated as text.
    pub fn feed(&mut self, line: &[u8]) -> Detection {
        if self.is_underline(line) {
            if let Some(level) = self.levels.classify(line[0]) {
                return Detection::Underline(level);
            }
        }
        if is_blank(line) {
            self.candidate.clear();
            Detection::Blank
        } else {
            self.candidate.set(line);
            Detection::Candidate
        }
    }

    fn is_underline(&self, line: &[u8]) -> bool {
        !self.candidate.is_empty()
            && line.len() >= self.candidate.display_len()
            && is_uniform_punctuation(line)
    }
}

/// Whether `line` is one punctuation character repeated.
#[must_use]
pub fn is_uniform_punctuation(line: &[u8]) -> bool {
    match line.split_first() {
        Some((&first, rest)) => first.is_ascii_punctuation() && rest.iter().all(|&b| b == first),
        None => false,
    }
}

/// Lines that are empty or start with whitespace never hold a title.
fn is_blank(line: &[u8]) -> bool {
    line.first()
        .is_none_or(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
}

#[cfg(test)]
#[path = "tests/detect.rs"]
mod tests;
